// src/config/mod.rs

pub mod consts;
pub mod options;

pub use options::{Alignment, AppOptions, ExportFormat, ExportOptions, ScrapeOptions, SiteConfig};
