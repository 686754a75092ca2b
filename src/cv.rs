//! Bundled CV resource loading.
//!
//! The CV text ships as a plain file next to the binary and is re-read on
//! every request so it can be edited without a redeploy. This operation
//! never fails from the caller's point of view: a missing or unreadable
//! file becomes an "ERROR: ..." body that the frontend displays as-is.

use std::io::ErrorKind;
use std::path::Path;

use tracing::error;

/// Body returned when the CV file does not exist.
const NOT_FOUND_MESSAGE: &str = "ERROR: 'cv.txt' not found in resources. Please create the file.";

/// Load the CV text, encoding any failure into the returned string.
pub async fn load_cv(path: &Path) -> String {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => NOT_FOUND_MESSAGE.to_string(),
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to read CV file");
            format!("ERROR: Could not read 'cv.txt'. Details: {e}")
        }
    }
}
