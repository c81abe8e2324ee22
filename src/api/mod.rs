//! Data sources for availability records.
//!
//! - [`ApiClient`] - the remote listings REST API
//! - [`SnapshotSource`] - a local JSON snapshot with the same record shapes
//! - [`dto`] - raw JSON shapes and the adapters normalizing them

mod client;
pub mod dto;
mod snapshot;
mod token;

pub use client::ApiClient;
pub use snapshot::SnapshotSource;
pub use token::TokenStore;
