//! HTTP API: query-serving collaborator for the scoring core

pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

pub use server::serve_api;
