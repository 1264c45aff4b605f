// tests/common/mod.rs
//
// In-memory site used by the integration tests. Serves fixed HTML per URL and
// records every request.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use ecb_scrape::config::SiteConfig;
use ecb_scrape::core::Fetch;
use ecb_scrape::error::FetchError;

pub const ROOT: &str = "http://stub.test";
pub const START: &str = "Jump to the transcript of the questions and answers";

pub fn site() -> SiteConfig {
    SiteConfig { root_url: ROOT.to_string(), ..SiteConfig::default() }
}

#[derive(Default)]
pub struct StubSite {
    pages: HashMap<String, String>,
    pub requests: Mutex<Vec<String>>,
}

impl StubSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }

    /// Index page for `year` listing `(date, title, slug)` entries, each with a
    /// conference page whose transcript is `answer`.
    pub fn year(mut self, year: i32, entries: &[(&str, &str, &str, &str)]) -> Self {
        let mut index = String::from("<dl>");
        for (date, title, slug, answer) in entries {
            let href = format!("/press/pressconference/{year}/html/{slug}.en.html");
            index.push_str(&format!(
                "<dt isodate=\"{year}\">{date}</dt><dd><div class=\"title\"><a href=\"{href}\">{title}</a></div></dd>"
            ));
            self.pages.insert(format!("{ROOT}{href}"), conference_page(title, answer));
        }
        index.push_str("</dl>");
        self.pages.insert(site().index_url(year), index);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetch for StubSite {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status { url: url.to_string(), status: 404 })
    }
}

/// A conference page shaped like the real template: title and address box
/// (both excluded), the statement ending in the start marker, then the answer.
pub fn conference_page(title: &str, answer: &str) -> String {
    format!(
        "<html><body><main>\
         <div class=\"title\"><h1>{title}</h1></div>\
         <div class=\"section\"><p>Statement for {title}.</p><p>{START}</p></div>\
         <div class=\"section\"><p>{answer}</p></div>\
         <div class=\"address-box\">Frankfurt am Main</div>\
         </main></body></html>"
    )
}
