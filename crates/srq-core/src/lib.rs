//! srq-core
//!
//! Pure domain types and object key conventions.
//! No AWS SDK dependency. This is the shared vocabulary of the SRQ-20 service.

pub mod error;
pub mod keys;
pub mod models;
