//! Supabase configuration and shape validation.
//!
//! The configuration is read once at startup. Missing or malformed values
//! never fail startup; they simply leave the gate unconfigured.

use tracing::debug;

/// Environment variable holding the project URL
pub const URL_ENV: &str = "SUPABASE_URL";
/// Environment variable holding the anon key
pub const ANON_KEY_ENV: &str = "SUPABASE_ANON_KEY";

/// Fallback names used by Vite-built frontends sharing the same `.env`
const VITE_URL_ENV: &str = "VITE_SUPABASE_URL";
const VITE_ANON_KEY_ENV: &str = "VITE_SUPABASE_ANON_KEY";

/// Required URL scheme prefix
const REQUIRED_SCHEME: &str = "https://";

/// Keys must be strictly longer than this
const MIN_KEY_LENGTH: usize = 20;

/// Number of URL characters shown in the config check
const URL_PREVIEW_CHARS: usize = 30;

/// Base URL and anon key for a Supabase project.
#[derive(Clone, Default)]
pub struct SupabaseConfig {
    url: String,
    anon_key: String,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
        }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Read the configuration through a custom variable lookup.
    ///
    /// Primary names win over the `VITE_` fallbacks. Empty values count as
    /// unset; unset values become empty strings.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let url = non_empty(URL_ENV)
            .or_else(|| non_empty(VITE_URL_ENV))
            .unwrap_or_default();
        let anon_key = non_empty(ANON_KEY_ENV)
            .or_else(|| non_empty(VITE_ANON_KEY_ENV))
            .unwrap_or_default();

        Self::new(url, anon_key)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// Conservative shape check: both values present, `https://` URL, and a
    /// key longer than 20 characters. No network validation happens here.
    pub fn is_valid(&self) -> bool {
        !self.url.is_empty()
            && !self.anon_key.is_empty()
            && self.url.starts_with(REQUIRED_SCHEME)
            && self.anon_key.chars().count() > MIN_KEY_LENGTH
    }

    /// Summarize the configuration without exposing the key.
    pub fn check(&self) -> ConfigCheck {
        let url_preview = if self.url.is_empty() {
            "missing".to_string()
        } else {
            let head: String = self.url.chars().take(URL_PREVIEW_CHARS).collect();
            format!("{}...", head)
        };

        ConfigCheck {
            has_url: !self.url.is_empty(),
            has_key: !self.anon_key.is_empty(),
            url_preview,
            key_length: self.anon_key.chars().count(),
            valid: self.is_valid(),
        }
    }
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("anon_key", &"[REDACTED]")
            .finish()
    }
}

/// Diagnostic summary of a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigCheck {
    pub has_url: bool,
    pub has_key: bool,
    pub url_preview: String,
    pub key_length: usize,
    pub valid: bool,
}

impl ConfigCheck {
    pub(crate) fn log(&self) {
        debug!(
            has_url = self.has_url,
            has_key = self.has_key,
            url = %self.url_preview,
            key_length = self.key_length,
            "Supabase config check"
        );
        debug!(valid = self.valid, "Supabase config valid: {}", self.valid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const GOOD_URL: &str = "https://abcdefghijklmnop.supabase.co";
    const GOOD_KEY: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.payload";

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_valid_config() {
        assert!(SupabaseConfig::new(GOOD_URL, GOOD_KEY).is_valid());
    }

    #[test]
    fn test_empty_values_are_invalid() {
        assert!(!SupabaseConfig::default().is_valid());
        assert!(!SupabaseConfig::new("", GOOD_KEY).is_valid());
        assert!(!SupabaseConfig::new(GOOD_URL, "").is_valid());
    }

    #[test]
    fn test_non_https_url_is_invalid() {
        assert!(!SupabaseConfig::new("http://abcdefghijklmnop.supabase.co", GOOD_KEY).is_valid());
        assert!(!SupabaseConfig::new("abcdefghijklmnop.supabase.co", GOOD_KEY).is_valid());
        assert!(!SupabaseConfig::new("HTTPS://abcdefghijklmnop.supabase.co", GOOD_KEY).is_valid());
    }

    #[test]
    fn test_key_length_boundary() {
        let twenty = "k".repeat(20);
        let twenty_one = "k".repeat(21);
        assert!(!SupabaseConfig::new(GOOD_URL, twenty).is_valid());
        assert!(SupabaseConfig::new(GOOD_URL, twenty_one).is_valid());
    }

    #[test]
    fn test_from_env_with_primary_names() {
        let config = SupabaseConfig::from_env_with(lookup_from(&[
            (URL_ENV, GOOD_URL),
            (ANON_KEY_ENV, GOOD_KEY),
            (VITE_URL_ENV, "https://other.supabase.co"),
        ]));
        assert_eq!(config.url(), GOOD_URL);
        assert_eq!(config.anon_key(), GOOD_KEY);
    }

    #[test]
    fn test_from_env_with_vite_fallback() {
        let config = SupabaseConfig::from_env_with(lookup_from(&[
            (VITE_URL_ENV, GOOD_URL),
            (VITE_ANON_KEY_ENV, GOOD_KEY),
        ]));
        assert!(config.is_valid());
    }

    #[test]
    fn test_from_env_with_empty_primary_uses_vite_fallback() {
        let config = SupabaseConfig::from_env_with(lookup_from(&[
            (URL_ENV, ""),
            (ANON_KEY_ENV, ""),
            (VITE_URL_ENV, GOOD_URL),
            (VITE_ANON_KEY_ENV, GOOD_KEY),
        ]));
        assert_eq!(config.url(), GOOD_URL);
        assert_eq!(config.anon_key(), GOOD_KEY);
        assert!(config.is_valid());
    }

    #[test]
    fn test_from_env_with_missing_values() {
        let config = SupabaseConfig::from_env_with(lookup_from(&[]));
        assert_eq!(config.url(), "");
        assert_eq!(config.anon_key(), "");
        assert!(!config.is_valid());
    }

    #[test]
    fn test_check_summary() {
        let check = SupabaseConfig::new(GOOD_URL, GOOD_KEY).check();
        assert!(check.has_url);
        assert!(check.has_key);
        assert_eq!(check.url_preview, "https://abcdefghijklmnop.supab...");
        assert_eq!(check.key_length, GOOD_KEY.len());
        assert!(check.valid);

        let check = SupabaseConfig::default().check();
        assert!(!check.has_url);
        assert_eq!(check.url_preview, "missing");
        assert_eq!(check.key_length, 0);
        assert!(!check.valid);
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug_str = format!("{:?}", SupabaseConfig::new(GOOD_URL, GOOD_KEY));
        assert!(!debug_str.contains(GOOD_KEY));
        assert!(debug_str.contains("[REDACTED]"));
    }
}
