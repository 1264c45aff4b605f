//! # Scraping “specs” module
//!
//! Page-specific scraping specifications for the ECB site. Each spec covers one
//! page shape and encodes *where the data lives in the HTML* and *how to read it*.
//!
//! ## What lives here
//! - **HTML parsing** of the yearly index (`index`) and of a single conference
//!   page (`transcript`), through the `core::html` helpers.
//! - The **text heuristics** of the conference template: excluded classes and the
//!   start/end markers, all taken from `SiteConfig`.
//!
//! ## What does **not** live here
//! - Iterating over years, progress reporting and the transcript worker pool
//!   (`scrape`).
//! - Writing files (`file`, `csv`).
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::fetch_all → specs::index::fetch_year_index
//!                                 ↘ scrape::fetch_transcripts → specs::transcript::fetch_transcript
//! ```
//!
//! ## Testing notes
//! - The `parse_index` / `extract_transcript` halves take a string and never touch
//!   the network, so they are tested against inline fixtures.
pub mod index;
pub mod transcript;
