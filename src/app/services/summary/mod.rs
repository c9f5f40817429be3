//! Aggregate views over parsed ads.txt records
//!
//! - [`statistics`] - Record counts by account type and distinct partners
//! - [`explorer`] - Partner ranking and record search

pub mod explorer;
pub mod statistics;

pub use explorer::{PartnerCount, search, top_partners};
pub use statistics::{Statistics, summarize};
