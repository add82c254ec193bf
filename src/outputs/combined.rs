//! Rendering, daily grouping, and writing of the legacy combined format.
//!
//! The consuming system expects one file per day: a 3-byte marker before
//! each article block, blocks joined by a newline plus that marker, every
//! block carrying a 5-line header, a ten-`=` rule, and the raw article text.
//! All byte-level details here are fixed by that downstream consumer and
//! must not change.

use std::collections::HashMap;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

use crate::errors::CombineError;
use crate::models::Record;
use crate::utils::ymd_to_mdy;

/// Marker bytes prepended to every block. These are the UTF-8 BOM bytes,
/// but the consumer treats them as an opaque record marker, so they are
/// kept as raw bytes rather than text.
pub const BLOCK_MARKER: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Rule separating a block's header from its article text. Appended directly
/// to the last header line, with the article text directly after it; the
/// legacy layout has no newline on either side of the rule.
const HEADER_RULE: &str = "==========";

/// Render one record into its output block bytes.
///
/// The header labels come from the legacy broadcast-transcript layout the
/// consumer was built for, which is why the author lands on `Description:`
/// and the publication on `Channel:`, and why the same reformatted date
/// fills both date lines. Carriage returns anywhere in the block (header
/// fields included) are normalized to newlines.
pub fn render_block(record: &Record) -> Vec<u8> {
    let mdy = ymd_to_mdy(&record.date);
    let header = [
        format!("Title: {}", record.title),
        format!("Description: {}", record.author),
        format!("Channel: {}", record.publication),
        format!("Recorded On: {mdy}"),
        format!("Original Air Date: {mdy}"),
    ]
    .join("\n");
    let block = format!("{header}{HEADER_RULE}{}", record.article_text);
    block.replace('\r', "\n").into_bytes()
}

/// Rendered blocks grouped by raw publication-date string.
///
/// The key is the metadata row's `Date` value exactly as it appeared in the
/// table, never the reformatted header date: records group together only
/// when their raw strings are identical. Day order is first-seen order;
/// within a day, blocks keep scan encounter order.
#[derive(Debug, Default)]
pub struct DayBuckets {
    days: Vec<(String, Vec<Vec<u8>>)>,
    index: HashMap<String, usize>,
}

impl DayBuckets {
    /// Render every record and bucket it under its raw date.
    pub fn from_records(records: &[Record]) -> Self {
        let mut buckets = Self::default();
        for record in records {
            buckets.push(&record.date, render_block(record));
        }
        buckets
    }

    fn push(&mut self, date: &str, block: Vec<u8>) {
        match self.index.get(date) {
            Some(&i) => self.days[i].1.push(block),
            None => {
                self.index.insert(date.to_string(), self.days.len());
                self.days.push((date.to_string(), vec![block]));
            }
        }
    }

    /// Number of distinct days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Combine each day's blocks into its final byte sequence.
    ///
    /// Every block is preceded by the 3-byte marker; blocks after the first
    /// are additionally preceded by a single newline. A day with N blocks
    /// therefore contains exactly N marker occurrences.
    pub fn into_daily_files(self) -> Vec<(String, Vec<u8>)> {
        self.days
            .into_iter()
            .map(|(date, blocks)| {
                let mut combined = Vec::new();
                for (i, block) in blocks.iter().enumerate() {
                    if i > 0 {
                        combined.push(b'\n');
                    }
                    combined.extend_from_slice(&BLOCK_MARKER);
                    combined.extend_from_slice(block);
                }
                (date, combined)
            })
            .collect()
    }
}

/// Write one `<date>-Combined.txt` file per day into `output_dir`.
///
/// Each file gets the day's combined bytes plus a single trailing newline
/// byte. Existing files are overwritten. The output directory must already
/// exist; it is never created here.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display()))]
pub async fn write_combined_files(
    days: Vec<(String, Vec<u8>)>,
    output_dir: &Path,
) -> Result<(), CombineError> {
    for (date, mut bytes) in days {
        bytes.push(b'\n');
        let path = output_dir.join(format!("{date}-Combined.txt"));
        info!(path = %path.display(), bytes = bytes.len(), "Writing combined daily file");
        fs::write(&path, &bytes).await?;
    }
    Ok(())
}
