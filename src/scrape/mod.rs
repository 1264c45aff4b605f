// src/scrape/mod.rs
mod scrape;

pub use scrape::fetch_all;
pub use scrape::fetch_transcripts;
