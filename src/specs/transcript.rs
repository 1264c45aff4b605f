// src/specs/transcript.rs
//! Scraping *spec* for a single press conference page.
//!
//! Purpose:
//! - Take the `<main>` element of the page and walk its **direct** element children.
//! - Drop children carrying any excluded class (page title, address box, related
//!   publications/topics), keep the trimmed text of everything else.
//! - Script, style and template text nested inside a kept child is left out.
//!   A direct `<script>`/`<style>` child of `<main>` keeps its text.
//! - Join the kept blocks with `\n` and cut the result at the template's markers.
//!
//! Marker rules (order matters):
//! 1. Start marker present: keep what follows its **last** occurrence.
//! 2. Otherwise end marker present: keep what precedes its **first** occurrence.
//! 3. Otherwise the joined text is returned untouched.
//!
//! The result is not trimmed again after cutting.

use scraper::Html;
use tracing::debug;

use crate::config::SiteConfig;
use crate::core::Fetch;
use crate::core::html::{block_text, child_elements, has_any_class, selector};
use crate::error::{ParseError, Result};

pub fn fetch_transcript(fetcher: &dyn Fetch, site: &SiteConfig, url: &str) -> Result<String> {
    let html_doc = fetcher.get(url)?;
    let text = extract_transcript(&html_doc, site).map_err(|e| match e {
        ParseError::MissingElement { what, .. } => ParseError::MissingElement { url: s!(url), what },
        other => other,
    })?;
    debug!(url, chars = text.len(), "transcript extracted");
    Ok(text)
}

/// Network-free half of `fetch_transcript`.
pub fn extract_transcript(html_doc: &str, site: &SiteConfig) -> std::result::Result<String, ParseError> {
    let doc = Html::parse_document(html_doc);
    let main_sel = selector("main")?;
    let main = doc
        .select(&main_sel)
        .next()
        .ok_or_else(|| ParseError::MissingElement { url: s!(), what: "main" })?;

    let blocks: Vec<String> = child_elements(main)
        .filter(|el| !has_any_class(el, &site.excluded_classes))
        .map(|el| block_text(&el))
        .collect();

    Ok(s!(trim_markers(&blocks.join("\n"), &site.start_marker, &site.end_marker)))
}

pub fn trim_markers<'a>(text: &'a str, start_marker: &str, end_marker: &str) -> &'a str {
    if let Some((_, after)) = text.rsplit_once(start_marker) {
        return after;
    }
    if let Some((before, _)) = text.split_once(end_marker) {
        return before;
    }
    text
}
