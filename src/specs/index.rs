// src/specs/index.rs
//! Scraping *spec* for the yearly conference index.
//!
//! Purpose:
//! - Fetch `index_include.en.html` for one year.
//! - Read every `<dt>` (publication date) and every `<div class="title">`
//!   (title + first `<a href>`), both in document order.
//! - Pair them **by position**. The page itself gives no stronger link between a
//!   date and its title block, so the counts are checked according to `Alignment`.
//!
//! The transcript of each listed conference is fetched afterwards, see
//! `specs::transcript` and `scrape::fetch_transcripts`.

use scraper::Html;
use tracing::{debug, warn};

use crate::config::{Alignment, ScrapeOptions, SiteConfig};
use crate::core::Fetch;
use crate::core::html::{selector, trimmed_text};
use crate::data::ConferenceRecord;
use crate::error::{ParseError, Result};
use crate::scrape::fetch_transcripts;

/// All conferences listed for `year`, transcripts included, in page order.
pub fn fetch_year_index(
    fetcher: &dyn Fetch,
    site: &SiteConfig,
    year: i32,
    opts: &ScrapeOptions,
) -> Result<Vec<ConferenceRecord>> {
    let url = site.index_url(year);
    let html_doc = fetcher.get(&url)?;
    let mut records = parse_index(&html_doc, site, opts.alignment, &url)?;
    debug!(year, listings = records.len(), "index parsed");

    let links: Vec<String> = records.iter().map(|r| r.link.clone()).collect();
    let texts = fetch_transcripts(fetcher, site, &links, opts.workers)?;
    for (record, text) in records.iter_mut().zip(texts) {
        record.text = text;
    }
    Ok(records)
}

/// Listings of one index page with `text` left empty.
/// `url` is only used in error messages.
pub fn parse_index(
    html_doc: &str,
    site: &SiteConfig,
    alignment: Alignment,
    url: &str,
) -> std::result::Result<Vec<ConferenceRecord>, ParseError> {
    let doc = Html::parse_document(html_doc);
    let dt_sel = selector("dt")?;
    let title_sel = selector("div.title")?;
    let a_sel = selector("a")?;

    let dates: Vec<String> = doc.select(&dt_sel).map(|dt| trimmed_text(&dt)).collect();
    let titles: Vec<_> = doc.select(&title_sel).collect();

    if dates.len() != titles.len() {
        match alignment {
            Alignment::Strict => {
                return Err(ParseError::Misaligned {
                    url: s!(url),
                    dates: dates.len(),
                    titles: titles.len(),
                });
            }
            Alignment::Truncate => warn!(
                url,
                dates = dates.len(),
                titles = titles.len(),
                "date/title count mismatch, extra entries dropped"
            ),
        }
    }

    let mut records = Vec::with_capacity(dates.len().min(titles.len()));
    for (index, (date, div)) in dates.into_iter().zip(titles).enumerate() {
        let href = div
            .select(&a_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or_else(|| ParseError::MissingAnchor { url: s!(url), index })?;

        records.push(ConferenceRecord {
            date,
            title: trimmed_text(&div),
            link: site.absolute_link(href.trim()),
            text: s!(),
        });
    }
    Ok(records)
}
