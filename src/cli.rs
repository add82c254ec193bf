//! Command-line interface definitions for the daily combine tool.
//!
//! Two positional arguments and nothing else: where the collection
//! directories live, and where the combined daily files go.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the daily combine pipeline.
///
/// # Examples
///
/// ```sh
/// daily_combine ./exports ./combined
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Root input directory. This should be the directory containing the
    /// per-collection subdirectories and the "search_records" folder.
    pub root_directory: PathBuf,

    /// Output directory for the combined daily files. Must already exist.
    pub output_directory: PathBuf,
}
