//! Summary statistics for a set of valid records

use crate::app::models::{AccountType, Record};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Aggregate counts over valid records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of valid records
    pub total_lines: usize,
    /// Number of distinct advertising system domains
    pub unique_partners: usize,
    /// Records with a DIRECT relationship
    pub direct_count: usize,
    /// Records with a RESELLER relationship
    pub reseller_count: usize,
}

impl Statistics {
    /// Share of DIRECT records as a percentage
    pub fn direct_ratio(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.direct_count as f64 / self.total_lines as f64) * 100.0
        }
    }
}

/// Compute statistics over valid records
///
/// Returns `None` for an empty slice rather than zeroed counts.
pub fn summarize(records: &[Record]) -> Option<Statistics> {
    if records.is_empty() {
        return None;
    }

    let unique_partners = records
        .iter()
        .map(|record| record.domain.as_str())
        .collect::<HashSet<_>>()
        .len();

    let direct_count = records
        .iter()
        .filter(|record| record.account_type == AccountType::Direct)
        .count();

    let reseller_count = records
        .iter()
        .filter(|record| record.account_type == AccountType::Reseller)
        .count();

    Some(Statistics {
        total_lines: records.len(),
        unique_partners,
        direct_count,
        reseller_count,
    })
}
