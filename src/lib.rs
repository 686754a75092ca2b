//! Backend API for the Neon City portfolio site.
//!
//! Four read-only endpoints behind a single axum server:
//!
//! ```text
//! GET /api/status    system status with a randomized server load
//! GET /api/mission   fixed mission log (demo data)
//! GET /api/cv        plain-text CV loaded from a bundled resource
//! GET /api/projects  GitHub repository list, proxied live
//! ```
//!
//! Every endpoint answers HTTP 200. Failures (a missing CV file, an
//! unreachable GitHub API) are reported in-band inside the payload so the
//! frontend can render them directly. That in-band reporting is the
//! site's contract and must not be changed to HTTP error statuses.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`status`]: Status report and mission log payloads
//! - [`cv`]: Bundled CV resource loading
//! - [`github`]: GitHub repositories client
//! - [`api`]: HTTP routes and handlers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod cv;
pub mod error;
pub mod github;
pub mod status;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, Result};
