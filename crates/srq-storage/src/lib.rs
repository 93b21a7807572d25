//! srq-storage
//!
//! JSON object storage. An S3 bucket in deployment; an in-process map for
//! tests and local runs. Both backends sit behind [`store::Store`].

pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod state;
pub mod store;
