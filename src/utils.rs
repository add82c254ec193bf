//! Utility functions for date reformatting and output-directory validation.

use chrono::NaiveDate;
use std::fs as stdfs;
use std::path::Path;
use tracing::info;

use crate::errors::CombineError;

/// Reformat an ISO `YYYY-MM-DD` date string as `MM/DD/YYYY`.
///
/// The legacy output layout wants US-style dates in its header lines. Input
/// that does not parse as an ISO calendar date is returned unchanged, since
/// the exports mix proper ISO dates with free-form legacy values, and those
/// pass through verbatim rather than failing the run.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(ymd_to_mdy("2023-05-01"), "05/01/2023");
/// assert_eq!(ymd_to_mdy("May 2023"), "May 2023");
/// ```
pub fn ymd_to_mdy(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%m/%d/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Check that the output directory exists and is writable.
///
/// Performs a write test by creating and immediately deleting a probe file.
/// The directory is never created here: combined files for a run land in a
/// directory the caller prepared, and a missing one should fail the run
/// before any collection is scanned.
///
/// # Errors
///
/// [`CombineError::OutputDirUnavailable`] if the path is not an existing
/// directory or the probe write fails.
pub fn ensure_writable_dir(path: &Path) -> Result<(), CombineError> {
    let is_dir = stdfs::metadata(path).map(|m| m.is_dir()).unwrap_or(false);
    if !is_dir {
        return Err(CombineError::OutputDirUnavailable(path.to_path_buf()));
    }
    let probe_path = path.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!(path = %path.display(), "Output directory is writable");
            Ok(())
        }
        Err(_) => Err(CombineError::OutputDirUnavailable(path.to_path_buf())),
    }
}
