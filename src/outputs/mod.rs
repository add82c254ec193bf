//! Output assembly for the combined daily files.
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── 2023-05-01-Combined.txt
//! ├── 2023-05-02-Combined.txt
//! └── ...
//! ```
//!
//! One file per distinct raw date value found in the metadata, each holding
//! every article published that day in the fixed legacy text layout.

pub mod combined;
