// src/config/options.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use time::OffsetDateTime;

use super::consts::*;
use crate::cli::Args;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub site: SiteConfig,
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Resolve and validate everything the CLI asked for.
    /// Runs before the first request; any error here means nothing was fetched.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let site = SiteConfig::default();
        let format: ExportFormat = args.format.parse()?;

        if args.workers == 0 {
            return Err(ConfigError::InvalidWorkers);
        }

        let start_year = args.start_year.unwrap_or(site.min_year);
        for year in std::iter::once(start_year).chain(args.end_year) {
            if year < site.min_year {
                return Err(ConfigError::YearTooEarly { year, min_year: site.min_year });
            }
        }
        if let Some(end) = args.end_year {
            if start_year > end {
                return Err(ConfigError::InvalidYearRange { start: start_year, end });
            }
        }

        let scrape = ScrapeOptions {
            start_year,
            end_year: args.end_year,
            workers: args.workers,
            alignment: if args.lenient { Alignment::Truncate } else { Alignment::Strict },
        };
        let export = ExportOptions { format, out_path: args.output_file.clone() };

        Ok(Self { site, scrape, export })
    }
}

/* ---------------- Site ---------------- */

/// Everything that describes the remote site and its page template.
/// Passed by reference into every fetcher so tests can point it elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub root_url: String,
    /// Path template, `{year}` is substituted.
    pub index_path: String,
    pub min_year: i32,
    pub start_marker: String,
    pub end_marker: String,
    pub excluded_classes: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root_url: s!(ROOT_URL),
            index_path: s!(INDEX_PATH),
            min_year: MIN_YEAR,
            start_marker: s!(START_MARKER),
            end_marker: s!(END_MARKER),
            excluded_classes: EXCLUDED_CLASSES.iter().map(|c| s!(*c)).collect(),
        }
    }
}

impl SiteConfig {
    pub fn index_url(&self, year: i32) -> String {
        join!(&self.root_url, &self.index_path.replace("{year}", &year.to_string()))
    }

    /// Links on the index are site-relative; absolute ones pass through.
    pub fn absolute_link(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            s!(href)
        } else {
            join!(&self.root_url, href)
        }
    }
}

/* ---------------- Scrape ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Date and title counts must match, otherwise the page is rejected.
    Strict,
    /// Pair up to the shorter list and drop the rest.
    Truncate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub start_year: i32,
    /// `None` means the current year at the time of the run.
    pub end_year: Option<i32>,
    pub workers: usize,
    pub alignment: Alignment,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            start_year: MIN_YEAR,
            end_year: None,
            workers: WORKERS,
            alignment: Alignment::Strict,
        }
    }
}

impl ScrapeOptions {
    pub fn resolved_end_year(&self) -> i32 {
        self.end_year.unwrap_or_else(current_year)
    }
}

pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ConfigError::UnsupportedFormat(s!(other))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ext())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_path: PathBuf,
}

impl ExportOptions {
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// False when the file name carries an extension for a different format.
    /// A missing extension is fine.
    pub fn extension_matches(&self) -> bool {
        match self.out_path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext.eq_ignore_ascii_case(self.format.ext()),
            None => true,
        }
    }
}
