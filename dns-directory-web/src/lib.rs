//! DNS Directory REST API server built on Actix-web.
//!
//! Thin HTTP layer over `dns-directory-core`: route table, handlers, the
//! error-to-status mapping, request logging, and TOML configuration. The
//! binary entrypoint in `main.rs` wires these together.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
