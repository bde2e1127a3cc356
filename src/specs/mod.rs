// src/specs/mod.rs
//! # Page "specs" module
//!
//! This module hosts the **page-specific knowledge** for the cargo portal.
//! Each spec encodes *where the ground truth lives in a page's table* — the
//! empirically determined column positions, prefixes, markers and canonical
//! column orders — as declarative data, so the transformation algorithms
//! above it never touch a literal index.
//!
//! ## What lives here
//! - **Fixed column positions** for the waybills-to-ship report table and the
//!   index → canonical-name mapping applied right after parsing.
//! - **Vendor quirks**: the `"WPG = "` route prefix, the injected subheader
//!   row, the carrier AWB prefix the search page omits, the `"Allocated"`
//!   shipped marker.
//! - **Canonical output shapes** for the Home Delivery sheets.
//! - The **initial shaping** step that turns a raw positional table into the
//!   named table both report pipelines consume.
//!
//! ## What does **not** live here
//! - Grouping, filtering, date math or any other business rule — those live
//!   in `reports::*` and only ever address columns by canonical name.
//! - Parsing mechanics (`table::parse`) and the structural primitives
//!   (`table::Table`).
//!
//! These positions are a contract with one specific vendor layout. They are
//! fragile by nature; keeping them in one place is the point.
pub mod awb_search;
pub mod waybills;
