//! GitHub repositories proxy for the projects endpoint.

pub mod client;
pub mod types;

pub use client::GithubClient;
pub use types::ProjectSummary;
