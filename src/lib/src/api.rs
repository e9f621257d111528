//! # API - functions to talk to the upstream repository hosting API
//!
//! `client` builds the shared HTTP client and issues requests, `endpoint` builds urls.
//!

pub mod client;
pub mod endpoint;
