//! Data model for article records.
//!
//! A [`Record`] is one row of a collection's CSV metadata table plus the full
//! text of the plaintext file that row references. The CSV columns use the
//! capitalized names of the legacy export format (`Filename`, `Title`, ...),
//! mapped onto snake_case fields via serde renames. Deserialization fails if
//! a required column is absent, so malformed tables are rejected at load time
//! rather than surfacing as missing keys mid-pipeline.

use serde::Deserialize;

/// One article: metadata row plus attached body text.
///
/// Created by the record loader, immutable afterwards, consumed once during
/// block rendering. `article_text` is not a CSV column; the loader fills it
/// in after reading `plaintext/<filename>`.
#[derive(Debug, Deserialize)]
pub struct Record {
    /// Path of the article body, relative to the collection's `plaintext`
    /// subdirectory.
    #[serde(rename = "Filename")]
    pub filename: String,
    /// Article title, verbatim from the table.
    #[serde(rename = "Title")]
    pub title: String,
    /// Article author, verbatim from the table.
    #[serde(rename = "Author")]
    pub author: String,
    /// Publication name, verbatim from the table.
    #[serde(rename = "Publication")]
    pub publication: String,
    /// Publication date as an ISO `YYYY-MM-DD` string. Kept raw: this exact
    /// string is the grouping key for daily output files.
    #[serde(rename = "Date")]
    pub date: String,
    /// Full UTF-8 contents of the referenced plaintext file.
    #[serde(skip)]
    pub article_text: String,
}
