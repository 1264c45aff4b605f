// src/progress.rs
/// Lightweight progress reporting for the multi-year scrape.
/// Frontends implement this to surface status; it never affects return values.
pub trait Progress {
    /// Called at the start with the number of years to fetch.
    fn begin(&mut self, _total_years: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each year with the running number of conferences.
    fn year_done(&mut self, _year: i32, _end_year: i32, _total_conferences: usize) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
