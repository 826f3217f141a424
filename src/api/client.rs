use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;
use uuid::Uuid;

/// Default request timeout in seconds
pub(super) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Time allowed for a connectivity probe before it is reported as timed out
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(1500);

/// Path of the PostgREST endpoint under the project URL
const REST_PATH: &str = "rest/v1/";

/// Default client version (from Cargo.toml)
const DEFAULT_VERSION: &str = env!("CARGO_PKG_VERSION");

fn build_user_agent() -> String {
    format!("supabase-gate/{}", DEFAULT_VERSION)
}

/// Client bound to one Supabase project.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct SupabaseClient {
    pub(super) client: Client,
    pub(super) base_url: Url,
    pub(super) anon_key: String,
    pub(super) user_agent: String,
    pub(super) probe_timeout: Duration,
}

impl SupabaseClient {
    /// Create a client for `base_url` authenticated with `anon_key`.
    ///
    /// No shape validation happens here; see [`crate::SupabaseConfig::is_valid`].
    pub fn new(base_url: &str, anon_key: &str) -> Result<Self> {
        let base_url = Self::parse_base_url(base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            anon_key: anon_key.to_string(),
            user_agent: build_user_agent(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        })
    }

    /// Override the probe timeout.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn probe_timeout(&self) -> Duration {
        self.probe_timeout
    }

    fn parse_base_url(base_url: &str) -> Result<Url> {
        // Without a trailing slash, `join` would drop the last path segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        Url::parse(&normalized).with_context(|| format!("Invalid base URL: {}", base_url))
    }

    /// URL of a table under the REST endpoint.
    pub fn table_url(&self, table: &str) -> std::result::Result<Url, url::ParseError> {
        self.base_url.join(REST_PATH)?.join(table)
    }

    /// Start a GET request against the REST endpoint with auth headers set.
    pub(super) fn rest_get(&self, url: Url) -> reqwest::RequestBuilder {
        let request_id = Uuid::new_v4().to_string();
        debug!("GET {} (request id {})", url, request_id);

        self.client
            .get(url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent)
            .header("x-request-id", request_id)
    }
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("base_url", &self.base_url.as_str())
            .field("anon_key", &"[REDACTED]")
            .field("probe_timeout", &self.probe_timeout)
            .finish()
    }
}
