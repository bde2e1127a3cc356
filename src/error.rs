// src/error.rs
//
// One error enum for the whole transformation core. Nothing in here is
// retried or swallowed; every failure propagates to the orchestration layer,
// which owns user-facing messaging. Empty results are NOT errors — an empty
// SLA mapping or an empty bot worklist is a valid output.

/// Errors the report pipelines can produce.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The scraped fragment contains no `<table>` element.
    #[error("no <table> element found in the scraped fragment")]
    NoTable,

    /// The source table is not rectangular. Ragged input is rejected rather
    /// than silently padded.
    #[error("ragged table: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// A named column (or record field) the pipeline relies on is absent.
    /// Indicates a contract violation between the scrape and the transform.
    #[error("missing column or field: '{name}'")]
    MissingColumn { name: String },

    /// A cell could not be converted to its required type. Carries the raw
    /// value so the offending scrape output can be diagnosed.
    #[error("row {row}, column '{column}': cannot convert {value:?} to {target}")]
    Coercion {
        row: usize,
        column: String,
        value: String,
        target: &'static str,
    },

    /// The caller handed the pipeline an invalid configuration, e.g. a column
    /// insert position past the end of the table. Checked before any mutation.
    #[error("invalid pipeline configuration: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReportError>;
