// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod scrape;
pub mod specs;

pub use data::ConferenceRecord;
pub use error::{Error, Result};
