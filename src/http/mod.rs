//! HTTP client for the PrizePicks projections API.
//!
//! This module wraps a single endpoint: an HTTPS GET to
//! `https://api.prizepicks.com/projections` for NBA props, sent with the
//! header set the PrizePicks web app uses from Chrome on Android. The API
//! rejects requests that do not look like the web app, so the header values
//! are kept verbatim as static data rather than derived.
//!
//! The response body is returned as raw bytes, whatever the status code.
//! Nothing here parses or retries; the caller writes the bytes straight to
//! disk.

use bytes::Bytes;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::error::{FetchError, Result};

const PRIZEPICKS_API: &str = "https://api.prizepicks.com";
const PROJECTIONS_PATH: &str = "/projections";

/// NBA league id as the PrizePicks web app sends it.
const LEAGUE_ID: &str = "7";
const PER_PAGE: &str = "250";

pub struct PrizePicksClient {
    client: Client,
    base_url: Url,
}

impl Default for PrizePicksClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PrizePicksClient {
    /// Creates a client pointed at the production PrizePicks API.
    ///
    /// # Panics
    /// Panics if the hardcoded URL is invalid (should never happen in practice).
    pub fn new() -> Self {
        Self::with_base_url(PRIZEPICKS_API.parse().expect("valid base URL"))
    }

    /// Same client against an arbitrary base URL, for tests against a mock
    /// server.
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Sends the one projections request and returns the raw body.
    ///
    /// The status code is logged but not checked: the upstream answer is
    /// persisted as-is, including error pages and the empty body of a `304`
    /// (likely, given the fixed `If-Modified-Since` header). No explicit
    /// timeout is set; the transport default applies.
    pub async fn fetch_projections(&self) -> Result<Bytes> {
        let mut url = self.base_url.clone();
        url.set_path(PROJECTIONS_PATH);
        let params = [
            ("league_id", LEAGUE_ID),
            ("per_page", PER_PAGE),
            ("single_stat", "true"),
        ];

        debug!("requesting {}", url);

        let response = self
            .client
            .get(url)
            .headers(browser_headers())
            .query(&params)
            .send()
            .await
            .map_err(FetchError::Network)?;

        info!("PrizePicks responded with status {}", response.status());

        let body = response.bytes().await.map_err(FetchError::Read)?;
        debug!("read {} bytes of response body", body.len());

        Ok(body)
    }
}

/// The header set captured from the PrizePicks web app, Chrome 109 on
/// Android. Values are load-bearing; do not tidy them.
pub(crate) fn browser_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(header::HOST, HeaderValue::from_static("api.prizepicks.com"));
    h.insert(
        HeaderName::from_static("sec-ch-ua"),
        HeaderValue::from_static(
            r#""Not_A Brand";v="99", "Google Chrome";v="109", "Chromium";v="109""#,
        ),
    );
    h.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    h.insert(
        HeaderName::from_static("sec-ch-ua-mobile"),
        HeaderValue::from_static("?1"),
    );
    h.insert(
        header::USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Linux; Android 6.0; Nexus 5 Build/MRA58N) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Mobile Safari/537.36",
        ),
    );
    h.insert(
        HeaderName::from_static("sec-ch-ua-platform"),
        HeaderValue::from_static("\"Android\""),
    );
    h.insert(
        header::ORIGIN,
        HeaderValue::from_static("https://app.prizepicks.com"),
    );
    h.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("same-site"),
    );
    h.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("cors"),
    );
    h.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("empty"),
    );
    h.insert(
        header::REFERER,
        HeaderValue::from_static("https://app.prizepicks.com/"),
    );
    // h.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
    h.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.9"),
    );
    h.insert(
        header::IF_MODIFIED_SINCE,
        HeaderValue::from_static("Thu, 12 Jan 2023 19:23:47 GMT"),
    );
    h
}
