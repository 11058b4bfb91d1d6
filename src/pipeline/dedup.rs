// file: src/pipeline/dedup.rs
// description: order-preserving deduplication of records by link

use crate::models::ModelRecord;
use std::collections::HashSet;

/// Keeps the first record seen for each link, in encounter order.
pub fn dedupe_by_link(records: Vec<ModelRecord>) -> Vec<ModelRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.link.clone()))
        .collect()
}
