// src/core/net.rs
// Page fetching. Blocking; one GET per source page, no retries.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use tracing::{debug, error, info, warn};

use crate::config::consts::{BROWSER_ACCEPT, BROWSER_ACCEPT_LANGUAGE, MAX_REDIRECTS, USER_AGENT};
use crate::config::options::FetchStrategy;
use crate::error::FetchError;

/// Anything that can turn a URL into page markup.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
    strategy: FetchStrategy,
}

impl HttpFetcher {
    pub fn new(strategy: FetchStrategy, timeout: Duration) -> Result<Self, FetchError> {
        let builder = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT);

        let builder = match strategy {
            FetchStrategy::Browser => {
                info!("Using browser-like client headers");
                builder
                    .default_headers(browser_headers())
                    .redirect(Policy::limited(MAX_REDIRECTS))
            }
            FetchStrategy::Plain => {
                warn!("Using plain HTTP client (may fail behind Cloudflare)");
                builder
            }
        };

        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self { client, strategy })
    }

    pub fn strategy(&self) -> FetchStrategy {
        self.strategy
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        info!(url, "Fetching data");

        let resp = self.client.get(url).send().map_err(|source| {
            error!(url, error = %source, "Request failed");
            FetchError::Transport { url: url.to_string(), source }
        })?;

        let status = resp.status();
        if !status.is_success() {
            error!(url, status = status.as_u16(), "Non-success HTTP status");
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let body = resp
            .text()
            .map_err(|source| FetchError::Body { url: url.to_string(), source })?;

        if looks_like_challenge(&body) {
            error!(url, "Received Cloudflare challenge page instead of actual content");
            return Err(FetchError::Challenge { url: url.to_string() });
        }

        info!(url, bytes = body.len(), "Fetched page");
        debug!(url, status = status.as_u16(), "Response accepted");
        Ok(body)
    }
}

pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE));
    headers.insert(header::UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers
}

/// Cloudflare interstitials mention both the vendor and a "Ray ID".
pub fn looks_like_challenge(body: &str) -> bool {
    let lc = body.to_ascii_lowercase();
    lc.contains("cloudflare") && lc.contains("ray id")
}
