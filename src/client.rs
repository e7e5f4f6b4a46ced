//! HTTP client for the remote API.
//!
//! [`TfeClient`] owns the connection pool, base URL and credentials. Resource
//! operations live next to their types (`crate::workspace`,
//! `crate::organization`) and are reached through handles borrowed from the
//! client.

pub mod jsonapi;
mod transport;

pub use transport::{TfeClient, MEDIA_TYPE};
