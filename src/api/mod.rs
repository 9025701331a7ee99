//! Notion REST API surface.
//!
//! The HTTP client wrapper and the serde wire models for the two endpoints
//! the exporter consumes.

mod client;
pub mod models;

pub use client::NotionClient;
