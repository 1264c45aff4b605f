// src/core/net.rs
//
// Blocking HTTP GET. One request per call, no retries.

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

/// Anything that can turn a URL into a page body.
/// `Sync` so the transcript workers can share one instance.
pub trait Fetch: Sync {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| FetchError::Transport { url: s!(), source })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "GET");
        let transport = |source: reqwest::Error| FetchError::Transport { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(transport)
    }
}
