//! srq-audit
//!
//! Structured audit events and the persisted access history.

pub mod access;
pub mod error;
pub mod events;
