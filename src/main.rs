//! # Daily Combine
//!
//! A batch converter that combines per-day article archives into single
//! daily text files in a fixed legacy format.
//!
//! ## Input Layout
//!
//! The root input directory holds one subdirectory per export collection.
//! Each collection contains a CSV metadata table (columns `Filename`,
//! `Title`, `Author`, `Publication`, `Date`) and a `plaintext` subdirectory
//! with one UTF-8 body file per table row. A reserved `search_records`
//! directory is skipped.
//!
//! ## Usage
//!
//! ```sh
//! daily_combine ./exports ./combined
//! ```
//!
//! ## Architecture
//!
//! The application is a sequential pipeline:
//! 1. **Scan**: Enumerate collection directories under the root
//! 2. **Load**: Parse each metadata table and attach article bodies
//! 3. **Aggregate**: Render each record into a block and group by raw date
//! 4. **Output**: Write one `<date>-Combined.txt` file per distinct date
//!
//! Any failure aborts the run before output is written; there is no
//! skip-and-continue mode.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod collections;
mod errors;
mod models;
mod outputs;
mod utils;

use cli::Cli;
use collections::collect_articles;
use outputs::combined::{DayBuckets, write_combined_files};
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("daily_combine starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.root_directory, ?args.output_directory, "Parsed CLI arguments");

    // Early check: the output directory must pre-exist and be writable.
    // Failing here beats failing after every collection has been read.
    ensure_writable_dir(&args.output_directory)?;

    // ---- Scan collections and load records ----
    let articles = collect_articles(&args.root_directory).await?;
    info!(count = articles.len(), "Total articles to combine");

    // ---- Group by publication day ----
    let buckets = DayBuckets::from_records(&articles);
    info!(days = buckets.len(), "Aggregated articles into daily buckets");

    // ---- Write one combined file per day ----
    write_combined_files(buckets.into_daily_files(), &args.output_directory).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    /// End-to-end run of the pipeline stages against an on-disk fixture:
    /// one collection, one record, CRLF line endings in the body.
    #[tokio::test]
    async fn test_pipeline_end_to_end() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("root");
        let out = tmp.path().join("out");
        stdfs::create_dir_all(root.join("radio1/plaintext")).unwrap();
        stdfs::create_dir_all(root.join("search_records")).unwrap();
        stdfs::create_dir_all(&out).unwrap();

        stdfs::write(
            root.join("radio1/metadata.csv"),
            "Filename,Title,Author,Publication,Date\na.txt,T,A,P,2023-05-01\n",
        )
        .unwrap();
        stdfs::write(root.join("radio1/plaintext/a.txt"), "Hello\r\nWorld").unwrap();

        ensure_writable_dir(&out).unwrap();
        let articles = collect_articles(&root).await.unwrap();
        assert_eq!(articles.len(), 1);
        let buckets = DayBuckets::from_records(&articles);
        write_combined_files(buckets.into_daily_files(), &out)
            .await
            .unwrap();

        let written = stdfs::read(out.join("2023-05-01-Combined.txt")).unwrap();
        let mut expected = vec![0xEF, 0xBB, 0xBF];
        expected.extend_from_slice(
            b"Title: T\nDescription: A\nChannel: P\n\
              Recorded On: 05/01/2023\nOriginal Air Date: 05/01/2023\
              ==========Hello\n\nWorld\n",
        );
        assert_eq!(written, expected);
    }

    /// A missing plaintext file anywhere aborts the run before any output
    /// file exists.
    #[tokio::test]
    async fn test_pipeline_writes_nothing_on_load_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("root");
        let out = tmp.path().join("out");
        stdfs::create_dir_all(root.join("radio1/plaintext")).unwrap();
        stdfs::create_dir_all(&out).unwrap();

        stdfs::write(
            root.join("radio1/metadata.csv"),
            "Filename,Title,Author,Publication,Date\n\
             a.txt,T,A,P,2023-05-01\n\
             gone.txt,U,A,P,2023-05-02\n",
        )
        .unwrap();
        stdfs::write(root.join("radio1/plaintext/a.txt"), "present").unwrap();

        assert!(collect_articles(&root).await.is_err());
        let leftovers: Vec<_> = stdfs::read_dir(&out).unwrap().collect();
        assert!(leftovers.is_empty());
    }
}
