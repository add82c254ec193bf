//! Error taxonomy for the combine pipeline.
//!
//! Every error here is fatal: the pipeline runs to completion or aborts on
//! the first failure, propagating up to `main` with `?`. The one absorbed
//! failure mode (an unparsable date string) never reaches this type; see
//! [`crate::utils::ymd_to_mdy`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures raised while scanning collections, loading records, or
/// writing combined output files.
#[derive(Debug, Error)]
pub enum CombineError {
    /// A collection directory contains no `.csv` metadata table.
    #[error("no metadata table found in {}", .0.display())]
    MissingMetadata(PathBuf),

    /// The metadata table exists but could not be parsed, including rows
    /// missing one of the required columns.
    #[error("failed to parse metadata table {}: {source}", path.display())]
    MetadataParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A metadata row references a plaintext file that does not exist.
    #[error("article file {} referenced by {} does not exist", path.display(), metadata.display())]
    MissingArticleFile { path: PathBuf, metadata: PathBuf },

    /// The output directory is absent or not writable. It must exist before
    /// the run starts; the pipeline never creates it.
    #[error("output directory {} does not exist or is not writable", .0.display())]
    OutputDirUnavailable(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}
