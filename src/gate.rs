//! Configuration & connectivity gate.
//!
//! Decides at startup whether usable credentials are present and, if so,
//! holds the client handle. The gate is an ordinary value: build it once and
//! hand it (or a clone) to whoever needs the client.
//!
//! ```ignore
//! let gate = ConnectionGate::from_config(SupabaseConfig::from_env());
//! if let Some(client) = gate.client() {
//!     // issue queries
//! }
//! let status = gate.test_connection().await;
//! ```

use tracing::{debug, error};

use crate::api::{ConnectionStatus, SupabaseClient};
use crate::config::SupabaseConfig;

#[derive(Debug, Clone)]
pub struct ConnectionGate {
    config: SupabaseConfig,
    client: Option<SupabaseClient>,
}

impl ConnectionGate {
    /// Build the gate, constructing a client only for a valid configuration.
    ///
    /// Never fails; an invalid configuration leaves the handle absent.
    pub fn from_config(config: SupabaseConfig) -> Self {
        config.check().log();

        let client = if config.is_valid() {
            match SupabaseClient::new(config.url(), config.anon_key()) {
                Ok(client) => Some(client),
                Err(e) => {
                    error!("Failed to create Supabase client: {:#}", e);
                    None
                }
            }
        } else {
            debug!("Supabase configuration invalid; client not created");
            None
        };

        Self { config, client }
    }

    /// Build the gate from the process environment.
    pub fn from_env() -> Self {
        Self::from_config(SupabaseConfig::from_env())
    }

    /// Configuration-valid flag.
    pub fn is_configured(&self) -> bool {
        self.config.is_valid()
    }

    /// Client handle; `None` when the configuration is invalid.
    pub fn client(&self) -> Option<&SupabaseClient> {
        self.client.as_ref()
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    /// Probe reachability of the backend.
    ///
    /// Without a client this returns "Supabase not configured" immediately and
    /// performs no I/O.
    pub async fn test_connection(&self) -> ConnectionStatus {
        match &self.client {
            Some(client) => client.test_connection().await,
            None => {
                debug!("No Supabase client available");
                ConnectionStatus::not_configured()
            }
        }
    }
}
