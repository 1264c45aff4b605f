// src/cli.rs
use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{AppOptions, ExportFormat};
use crate::core::{Fetch, HttpClient};
use crate::error::Result;
use crate::file::export_records;
use crate::progress::Progress;
use crate::scrape::fetch_all;

#[derive(Debug, Parser)]
#[command(
    name = "ecb_scrape",
    version,
    about = "Fetch ECB press conferences and save them as CSV or JSON."
)]
pub struct Args {
    /// First year to fetch (default: 1998, the earliest year on the site)
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Last year to fetch, inclusive (default: current year)
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Output file
    #[arg(short, long)]
    pub output_file: PathBuf,

    /// Output format: csv or json
    #[arg(short, long, default_value = "csv")]
    pub format: String,

    /// Transcript pages fetched in parallel per year
    #[arg(short, long, default_value_t = 1)]
    pub workers: usize,

    /// Tolerate index pages whose date and title counts differ
    #[arg(long)]
    pub lenient: bool,

    /// More log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub conferences: usize,
}

/// The confirmation line printed by the binary.
impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Data saved to {} ({}).", self.path.display(), self.format)
    }
}

/// Validate, scrape over HTTP with a console progress bar, export.
pub fn run(args: &Args) -> Result<RunSummary> {
    // everything is validated before the client exists
    let opts = AppOptions::from_args(args)?;
    let client = HttpClient::new()?;
    let mut bar = BarProgress::new();
    scrape_and_export(&opts, &client, Some(&mut bar))
}

pub fn scrape_and_export(
    opts: &AppOptions,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let records = fetch_all(fetcher, &opts.site, &opts.scrape, progress)?;
    let path = export_records(&opts.export, &records)?;
    Ok(RunSummary { path, format: opts.export.format, conferences: records.len() })
}

/* ---------------- Console progress ---------------- */

pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new() -> Self {
        let style = ProgressStyle::with_template("{msg} [{bar:30}] {pos}/{len} years ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        let bar = ProgressBar::new(0).with_style(style);
        bar.set_message("Starting...");
        Self { bar }
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for BarProgress {
    fn begin(&mut self, total_years: usize) {
        self.bar.set_length(total_years as u64);
    }

    fn log(&mut self, msg: &str) {
        self.bar.set_message(s!(msg));
    }

    fn year_done(&mut self, year: i32, end_year: i32, total_conferences: usize) {
        self.bar.set_message(format!("Year: {year}/{end_year}, Total conferences: {total_conferences}"));
        self.bar.inc(1);
    }

    fn finish(&mut self) {
        self.bar.finish();
    }
}
