//! Merging and URL-based deduplication of loaded collections.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::domain::{natural_key, LoadResult, MergedCollection, SourceRecord};

/// Keep the first record for each non-empty URL, in input order.
///
/// Records without a URL have no identity and are always kept, even when
/// they are otherwise identical to another record.
pub fn dedup_records<I>(records: I) -> Vec<SourceRecord>
where
    I: IntoIterator<Item = SourceRecord>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();

    for record in records {
        let key = natural_key(&record);
        if key.is_empty() || seen.insert(key.to_string()) {
            unique.push(record);
        }
    }

    unique
}

/// Concatenate every collection in order and deduplicate the result.
pub fn merge_results(results: &[LoadResult]) -> MergedCollection {
    let all_records = results.iter().flat_map(|result| result.records.iter().cloned());
    let original_total = results.iter().map(|result| result.records.len()).sum();
    let records = dedup_records(all_records);

    tracing::debug!(
        original_total,
        unique = records.len(),
        "merged book source collections"
    );

    MergedCollection { records, original_total }
}

/// Label to record count, in input order. A repeated label keeps its first
/// position and takes the later count.
pub fn source_stats(results: &[LoadResult]) -> Map<String, Value> {
    let mut stats = Map::new();
    for result in results {
        stats.insert(result.label.clone(), Value::from(result.count));
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loaded(label: &str, records: Vec<Value>) -> LoadResult {
        LoadResult {
            file: format!("{label}.json"),
            label: label.to_string(),
            count: records.len(),
            records,
            size_bytes: 0,
        }
    }

    #[test]
    fn first_occurrence_wins_across_files() {
        let results = vec![
            loaded("one", vec![json!({"bookSourceUrl": "a", "bookSourceName": "X"})]),
            loaded(
                "two",
                vec![
                    json!({"bookSourceUrl": "a", "bookSourceName": "Y"}),
                    json!({"bookSourceUrl": "b", "bookSourceName": "Z"}),
                ],
            ),
        ];

        let merged = merge_results(&results);
        assert_eq!(
            merged.records,
            vec![
                json!({"bookSourceUrl": "a", "bookSourceName": "X"}),
                json!({"bookSourceUrl": "b", "bookSourceName": "Z"}),
            ]
        );
        assert_eq!(merged.original_total, 3);
        assert_eq!(merged.total(), 2);
        assert_eq!(merged.duplicates_removed(), 1);
    }

    #[test]
    fn url_less_records_are_never_merged() {
        let twin = json!({"bookSourceName": "NoUrl"});
        let unique =
            dedup_records(vec![twin.clone(), twin.clone(), json!({"bookSourceName": "NoUrl2"})]);
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn variants_share_one_key_space() {
        let unique = dedup_records(vec![
            json!({"sourceUrl": "https://x", "sourceName": "rss"}),
            json!({"bookSourceUrl": "https://x", "bookSourceName": "book"}),
        ]);
        assert_eq!(unique, vec![json!({"sourceUrl": "https://x", "sourceName": "rss"})]);
    }

    #[test]
    fn dedup_is_idempotent() {
        let input = vec![
            json!({"bookSourceUrl": "a"}),
            json!({"bookSourceName": "none"}),
            json!({"bookSourceUrl": "a", "weight": 2}),
            json!({"bookSourceUrl": "b"}),
        ];
        let once = dedup_records(input.clone());
        let again = dedup_records(input);
        assert_eq!(once, again);
        assert_eq!(dedup_records(once.clone()), once);
    }

    #[test]
    fn merged_keys_are_unique() {
        let input: Vec<Value> =
            (0..20).map(|i| json!({"bookSourceUrl": format!("u{}", i % 7)})).collect();
        let unique = dedup_records(input);
        let keys: HashSet<&str> = unique.iter().map(natural_key).collect();
        assert_eq!(keys.len(), unique.len());
        assert_eq!(unique.len(), 7);
    }

    #[test]
    fn empty_input_merges_to_nothing() {
        let merged = merge_results(&[]);
        assert_eq!(merged, MergedCollection::default());
        assert!(source_stats(&[]).is_empty());
    }

    #[test]
    fn stats_follow_input_order() {
        let results = vec![loaded("b", vec![json!(1), json!(2)]), loaded("a", vec![json!(3)])];
        let stats = source_stats(&results);
        let labels: Vec<&String> = stats.keys().collect();
        assert_eq!(labels, vec!["b", "a"]);
        assert_eq!(stats["b"], json!(2));
    }
}
