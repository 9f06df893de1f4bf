//! fieldfix data ingestion.
//!
//! Loads the reference workbook (a directory of per-category CSV sheets) and
//! the main input table. Reference loading is the only fatal path before a
//! run: every category must be present with its structural headers.

pub mod dataset;
pub mod error;
pub mod reference;

pub use dataset::read_table;
pub use error::{IngestError, Result};
pub use reference::{load_reference_dir, load_reference_sheet, sheet_path};
