//! Streaming archive extraction with path sanitization.
//!
//! Consumes a gzip-compressed tar byte stream and materializes its entries
//! (directories, regular files, symlinks) under a destination root.
//!
//! # Architecture
//!
//! - `sanitize.rs` - Entry name stripping and zip-slip prevention
//! - `extract.rs` - Decompression and per-entry materialization
//! - `options.rs` - Extraction knobs
//! - `report.rs` - Extraction summary

pub use error::{Error, Result};
pub use extract::extract;
pub use options::{ExtractOptions, LinkPolicy};
pub use report::ExtractReport;
pub use sanitize::{SanitizedPath, sanitize_entry_path};

mod error;
mod extract;
mod options;
mod report;
mod sanitize;
