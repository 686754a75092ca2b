//! Status report and mission log payloads.
//!
//! Both are demo data for the portfolio frontend. The status report is
//! rebuilt on every call (fresh timestamp, fresh random load); the mission
//! log is a constant.

use chrono::Local;
use rand::Rng;
use serde::Serialize;

/// Timestamp format used by the status report.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// System status snapshot, randomized per call.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    /// Always "ONLINE".
    pub status: &'static str,
    /// Backend version string.
    pub version: &'static str,
    /// Wall-clock time of this snapshot.
    pub last_update: String,
    /// Simulated load, "NN.NN%" with the numeric part in [0, 100).
    pub server_load: String,
    /// Flavor text for the frontend terminal.
    pub message: &'static str,
}

impl StatusReport {
    /// Build a fresh snapshot from the wall clock and RNG.
    pub fn generate() -> Self {
        let load: f64 = rand::thread_rng().gen_range(0.0..100.0);
        // Truncate instead of round so the displayed value stays below 100.00.
        let load = (load * 100.0).floor() / 100.0;

        Self {
            status: "ONLINE",
            version: "2.1.0-beta",
            last_update: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            server_load: format!("{load:.2}%"),
            message: "Neural network operational. Data streams flowing.",
        }
    }
}

/// Fixed mission log entry, identical on every call.
#[derive(Debug, Clone, Serialize)]
pub struct MissionLog {
    /// Mission identifier.
    pub mission_id: &'static str,
    /// Mission objective.
    pub objective: &'static str,
    /// Mission state.
    pub status: &'static str,
    /// Mission priority.
    pub priority: &'static str,
    /// Assigned agent codename.
    pub agent: &'static str,
    /// Mission deadline.
    pub deadline: &'static str,
}

impl MissionLog {
    /// The one mission log this backend serves.
    pub fn current() -> Self {
        Self {
            mission_id: "MX-7B-9",
            objective: "Retrieve encrypted data from Sector 7G.",
            status: "PENDING",
            priority: "HIGH",
            agent: "GhostRunner",
            deadline: "2077-07-25 03:00:00",
        }
    }
}
