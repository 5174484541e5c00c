//! The period model: date normalization, period filtering and grouping,
//! aggregation, overdue detection and report assembly. Everything here is
//! a pure function of an in-memory snapshot plus a caller-supplied
//! "today"; fetching and caching live in the repository and service
//! layers.

pub mod aggregate;
pub mod entry;
pub mod filter;
pub mod overdue;
pub mod period;
pub mod report;
