//! srq-auth
//!
//! Bearer-token validation. Tokens are issued by an external identity
//! provider and signed with a shared HS256 secret; this crate turns a valid
//! token into the [`caller::Caller`] identity handed to request handlers.

pub mod caller;
pub mod error;
pub mod jwt;
