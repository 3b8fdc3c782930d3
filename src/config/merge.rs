//! Apply CLI overrides on top of a loaded config.

use crate::domain::Config;
use std::path::PathBuf;

/// Values given on the command line. `None`/`false` leaves the config as is.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub sources_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub description: Option<String>,
    pub no_individual: bool,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(dir) = cli.sources_dir {
        config.sources_dir = dir;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(description) = cli.description {
        config.description = description;
    }
    if cli.no_individual {
        config.write_individual = false;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_values_win() {
        let merged = merge_cli_with_config(
            Config::default(),
            CliOverrides {
                sources_dir: Some(PathBuf::from("in")),
                output_dir: None,
                description: Some("custom".to_string()),
                no_individual: true,
            },
        );
        assert_eq!(merged.sources_dir, PathBuf::from("in"));
        assert_eq!(merged.output_dir, Config::default().output_dir);
        assert_eq!(merged.description, "custom");
        assert!(!merged.write_individual);
    }

    #[test]
    fn empty_overrides_keep_config() {
        let merged = merge_cli_with_config(Config::default(), CliOverrides::default());
        assert!(merged.write_individual);
        assert_eq!(merged.sources.len(), 7);
    }
}
