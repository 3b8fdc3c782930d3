//! book-source-merge: Merge Legado book source collections
//!
//! Running the binary with no arguments executes the full merge pipeline
//! using the built-in source table.

use anyhow::Result;

fn main() -> Result<()> {
    book_source_merge::cli::run()?;
    Ok(())
}
