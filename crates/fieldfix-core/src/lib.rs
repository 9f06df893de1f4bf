//! fieldfix correction engine.
//!
//! Pure logic over the model types: normalize free text, derive correction
//! maps from reference tables, correct individual columns, and orchestrate a
//! whole-table run that inserts each corrected column right after its source.
//! All per-cell conditions degrade to structured outcomes; nothing in this
//! crate performs I/O or fails at runtime.

pub mod engine;
pub mod map;
pub mod normalize;

pub use engine::{
    ColumnSummary, CorrectionPlan, CorrectionReport, correct_column, correct_table,
};
pub use map::CorrectionMap;
pub use normalize::{lookup_key, normalize, normalize_cell};
