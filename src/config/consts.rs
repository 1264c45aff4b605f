// src/config/consts.rs

// Net config
pub const ROOT_URL: &str = "https://www.ecb.europa.eu";
pub const INDEX_PATH: &str = "/press/pressconf/{year}/html/index_include.en.html";
pub const USER_AGENT: &str = concat!("ecb_scrape/", env!("CARGO_PKG_VERSION"));

// Scrape
pub const MIN_YEAR: i32 = 1998;
pub const START_MARKER: &str = "Jump to the transcript of the questions and answers";
pub const END_MARKER: &str = "\nReproduction is permitted provided that the source is acknowledged";
pub const EXCLUDED_CLASSES: &[&str] = &[
    "title",
    "address-box",
    "related-publications",
    "related-topics",
    "ecb-pressContentTitle",
];

// Concurrency
pub const WORKERS: usize = 1; // sequential unless asked otherwise
