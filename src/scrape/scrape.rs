// src/scrape/scrape.rs
use std::{
    thread,
    sync::{ mpsc, atomic::{ AtomicBool, AtomicUsize, Ordering }},
};

use tracing::{debug, info};

use crate::{
    config::{ ScrapeOptions, SiteConfig },
    core::Fetch,
    data::ConferenceRecord,
    error::{ ConfigError, Error, Result },
    progress::Progress,
    specs::{ index::fetch_year_index, transcript::fetch_transcript },
};

/// Fetch every conference from `opts.start_year` to the end year, inclusive.
/// The end year defaults to the current one. Stops at the first error;
/// nothing collected so far is returned in that case.
pub fn fetch_all(
    fetcher: &dyn Fetch,
    site: &SiteConfig,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<ConferenceRecord>> {
    let start_year = opts.start_year;
    let end_year = opts.resolved_end_year();
    if start_year > end_year {
        return Err(ConfigError::InvalidYearRange { start: start_year, end: end_year }.into());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(end_year.abs_diff(start_year) as usize + 1);
    }

    let mut all: Vec<ConferenceRecord> = Vec::new();
    for year in start_year..=end_year {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {year}…"));
        }
        let mut year_records = fetch_year_index(fetcher, site, year, opts)?;
        all.append(&mut year_records);

        info!(year, end_year, total = all.len(), "year done");
        if let Some(p) = progress.as_deref_mut() {
            p.year_done(year, end_year, all.len());
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(all)
}

/// Fetch the transcript behind each link, results in the same order as `links`.
///
/// With `workers > 1` a small scoped pool pulls indices off a shared counter.
/// The first failure stops new requests from being started; the error of the
/// lowest failing index is returned.
pub fn fetch_transcripts(
    fetcher: &dyn Fetch,
    site: &SiteConfig,
    links: &[String],
    workers: usize,
) -> Result<Vec<String>> {
    if workers <= 1 || links.len() <= 1 {
        return links.iter().map(|link| fetch_transcript(fetcher, site, link)).collect();
    }

    let workers = workers.min(links.len());
    let next = AtomicUsize::new(0);
    let failed = AtomicBool::new(false);
    let (res_tx, res_rx) = mpsc::channel::<(usize, Result<String>)>();

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let (next, failed) = (&next, &failed);

            scope.spawn(move || {
                loop {
                    if failed.load(Ordering::Relaxed) {
                        break;
                    }
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    if i >= links.len() {
                        break;
                    }
                    let result = fetch_transcript(fetcher, site, &links[i]);
                    if result.is_err() {
                        failed.store(true, Ordering::Relaxed);
                    }
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        let mut texts: Vec<(usize, String)> = Vec::with_capacity(links.len());
        let mut first_err: Option<(usize, Error)> = None;

        for (i, result) in res_rx {
            match result {
                Ok(text) => texts.push((i, text)),
                Err(e) => {
                    debug!(index = i, error = %e, "transcript worker failed");
                    if first_err.as_ref().is_none_or(|(j, _)| i < *j) {
                        first_err = Some((i, e));
                    }
                }
            }
        }

        if let Some((_, e)) = first_err {
            return Err(e);
        }

        // Sort
        texts.sort_by_key(|(i, _)| *i);
        Ok(texts.into_iter().map(|(_, text)| text).collect())
    })
}
