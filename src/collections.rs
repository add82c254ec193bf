//! Collection scanning and record loading.
//!
//! The input root holds one subdirectory per export collection. Each
//! collection carries a single CSV metadata table plus a `plaintext`
//! subdirectory with one body file per table row. A reserved
//! `search_records` directory sits alongside the collections and is skipped.
//!
//! Failures here are fatal by design: a collection without a metadata table,
//! an unparsable table, or a row whose plaintext file is missing all abort
//! the run before anything is written. There is no skip-and-continue mode.

use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

use crate::errors::CombineError;
use crate::models::Record;

/// Directory name reserved for the export tool's own search records; never a
/// collection.
const RESERVED_DIR: &str = "search_records";

/// Load all records from one collection directory.
///
/// Finds the collection's metadata table (the first `.csv` file the
/// directory listing yields), deserializes its rows in order, and attaches
/// each row's article body from `plaintext/<Filename>`.
///
/// # Errors
///
/// - [`CombineError::MissingMetadata`] if the directory has no `.csv` file
/// - [`CombineError::MetadataParse`] if the table or any row is malformed
/// - [`CombineError::MissingArticleFile`] if a referenced body is absent
#[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
pub async fn load_records(dir: &Path) -> Result<Vec<Record>, CombineError> {
    let mut candidates = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if entry.file_type().await?.is_file()
            && path.extension().is_some_and(|ext| ext == "csv")
        {
            candidates.push(path);
        }
    }

    // First listed candidate wins; directory order is whatever the OS yields.
    let Some(metadata_path) = candidates.first().cloned() else {
        return Err(CombineError::MissingMetadata(dir.to_path_buf()));
    };
    if candidates.len() > 1 {
        debug!(
            dir = %dir.display(),
            count = candidates.len(),
            using = %metadata_path.display(),
            "Multiple metadata tables found; using first listed"
        );
    }

    let raw = fs::read(&metadata_path).await?;
    let mut reader = csv::Reader::from_reader(raw.as_slice());
    let text_root = dir.join("plaintext");

    let mut records = Vec::new();
    for row in reader.deserialize::<Record>() {
        let mut record = row.map_err(|source| CombineError::MetadataParse {
            path: metadata_path.clone(),
            source,
        })?;

        let text_path = text_root.join(&record.filename);
        record.article_text = match fs::read_to_string(&text_path).await {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CombineError::MissingArticleFile {
                    path: text_path,
                    metadata: metadata_path,
                });
            }
            Err(e) => return Err(e.into()),
        };
        records.push(record);
    }

    info!(
        dir = %dir.display(),
        table = %metadata_path.display(),
        count = records.len(),
        "Loaded collection records"
    );
    Ok(records)
}

/// Collect records from every collection directory under `root`.
///
/// Visits each direct subdirectory of `root` except the reserved
/// `search_records` one, loads its records, and flattens everything into one
/// ordered sequence: per-collection row order within directory-visit order.
/// Visit order itself is unspecified.
///
/// # Errors
///
/// Propagates any [`load_records`] failure; no partial result is returned.
#[instrument(level = "info", skip_all, fields(root = %root.display()))]
pub async fn collect_articles(root: &Path) -> Result<Vec<Record>, CombineError> {
    let mut articles = Vec::new();
    let mut entries = fs::read_dir(root).await?;
    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_dir() {
            continue;
        }
        if entry.file_name() == RESERVED_DIR {
            debug!(dir = %entry.path().display(), "Skipping reserved directory");
            continue;
        }
        let records = load_records(&entry.path()).await?;
        articles.extend(records);
    }

    info!(count = articles.len(), "Collected articles from all collections");
    Ok(articles)
}
