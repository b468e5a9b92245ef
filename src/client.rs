use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::models::PlayerBan;

const DEFAULT_BASE_URL: &str = "http://minebans.com/";
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

static PLAYER_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{2,16}$").unwrap());

/// Client for the minebans.com JSON feeds.
///
/// Holds the server API key (if any) and a preconfigured HTTP client. Every
/// operation is a single blocking GET with no retry and no caching; the
/// client keeps no state between calls, so sharing one instance across
/// threads needs no coordination.
#[derive(Debug)]
pub struct MineBansClient {
    http: reqwest::blocking::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl MineBansClient {
    /// Creates a client against minebans.com with the default 5 second
    /// connect and request timeouts.
    ///
    /// `api_key` may be `None` if only keyless requests will be made.
    pub fn new(api_key: Option<String>) -> Self {
        MineBansClientBuilder::new()
            .api_key(api_key)
            .build()
            .expect("default client configuration is valid")
    }

    /// Creates a client taking the API key from the `MINEBANS_API_KEY`
    /// environment variable, if set.
    pub fn from_env() -> Self {
        Self::new(std::env::var("MINEBANS_API_KEY").ok())
    }

    pub fn builder() -> MineBansClientBuilder {
        MineBansClientBuilder::new()
    }

    /// Fetches the moderators of the server the API key belongs to. These
    /// are the players allowed to upload ban data for the server.
    ///
    /// Requires the API key; fails with [`ApiError::MissingApiKey`] before
    /// any network attempt if it was not configured.
    pub fn server_moderators(&self) -> Result<Vec<String>, ApiError> {
        let api_key = self.require_api_key()?;
        self.fetch("feed/server_moderators.json", &[("api_key", api_key)])
    }

    /// Fetches all global bans issued against `player_name`, in the order
    /// the feed returns them.
    ///
    /// Does not require the API key. The name must match
    /// `[A-Za-z0-9_]{2,16}`; anything else fails with
    /// [`ApiError::InvalidPlayerName`] before any network attempt.
    pub fn player_bans(&self, player_name: &str) -> Result<Vec<PlayerBan>, ApiError> {
        if !PLAYER_NAME_RE.is_match(player_name) {
            return Err(ApiError::InvalidPlayerName(player_name.to_owned()));
        }
        self.fetch("feed/player_bans.json", &[("player_name", player_name)])
    }

    /// Fetches all global bans uploaded by the server the API key belongs
    /// to, in the order the feed returns them.
    ///
    /// Requires the API key; fails with [`ApiError::MissingApiKey`] before
    /// any network attempt if it was not configured.
    pub fn server_bans(&self) -> Result<Vec<PlayerBan>, ApiError> {
        let api_key = self.require_api_key()?;
        self.fetch("feed/server_bans.json", &[("api_key", api_key)])
    }

    fn require_api_key(&self) -> Result<&str, ApiError> {
        self.api_key.as_deref().ok_or(ApiError::MissingApiKey)
    }

    fn fetch<T: DeserializeOwned>(
        &self,
        feed: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut url = self.base_url.join(feed)?;
        for (name, value) in params {
            url.query_pairs_mut().append_pair(name, value);
        }

        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().map_err(|e| {
            tracing::error!("MineBans feed request failed: {}", e);
            e
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::error!("MineBans feed returned {}: {}", status, body);
            return Err(ApiError::UnexpectedStatus { status, body });
        }

        Ok(response.json::<T>()?)
    }
}

/// Builder for [`MineBansClient`], for tests and self-hosted deployments
/// that need a different endpoint or timeouts.
pub struct MineBansClientBuilder {
    api_key: Option<String>,
    base_url: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl MineBansClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Overrides the feed host, e.g. `http://127.0.0.1:8080/`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Overall deadline for each request, covering the response read.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<MineBansClient, ApiError> {
        let mut base_url = self.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url)?;

        // The feeds must always be fetched fresh.
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let http = reqwest::blocking::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout)
            .default_headers(headers)
            .build()?;

        Ok(MineBansClient {
            http,
            base_url,
            api_key: self.api_key,
        })
    }
}

impl Default for MineBansClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
