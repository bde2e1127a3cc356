// src/core/mod.rs
// Pure, std-only text/HTML helpers. No business knowledge lives here.
pub mod html;
pub mod sanitize;
