//! Partner ranking and record search
//!
//! Read-only views used by reports: the most frequent advertising systems and
//! a case-insensitive search over domain and publisher ID.

use crate::app::models::Record;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of records declared for one advertising system domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerCount {
    pub domain: String,
    pub count: usize,
}

/// Rank advertising system domains by number of records
///
/// Sorted by count descending, ties by domain ascending, truncated to `limit`.
pub fn top_partners(records: &[Record], limit: usize) -> Vec<PartnerCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.domain.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<PartnerCount> = counts
        .into_iter()
        .map(|(domain, count)| PartnerCount {
            domain: domain.to_string(),
            count,
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.domain.cmp(&b.domain)));
    ranked.truncate(limit);
    ranked
}

/// Find records whose domain or publisher ID contains `term`, ignoring case
///
/// An empty (or whitespace-only) term matches every record. Input order is kept.
pub fn search<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| {
            record.domain.contains(&needle)
                || record.publisher_id.to_lowercase().contains(&needle)
        })
        .collect()
}
