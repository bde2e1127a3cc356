// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod specs;

pub mod dates;
pub mod error;
pub mod reports;
pub mod table;

pub use error::{ReportError, Result};
