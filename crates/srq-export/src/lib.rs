//! srq-export
//!
//! Aggregate statistics and JSON/CSV export over stored evaluations.
//! Works on already-loaded records; no storage dependency.

pub mod error;
pub mod records;
pub mod stats;
