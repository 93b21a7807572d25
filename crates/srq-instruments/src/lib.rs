//! srq-instruments
//!
//! The SRQ-20 instrument. Pure data and pure functions, no storage or AWS
//! dependency. Defines the question catalog, the suggested-activity catalog,
//! the score-to-level classification, and the activity recommender.

pub mod error;
pub mod recommend;
pub mod scoring;
pub mod srq20;
