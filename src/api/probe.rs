//! Connectivity probe against the REST endpoint.

use tokio::time::{timeout_at, Instant};
use tracing::{debug, info, warn};

use super::client::SupabaseClient;
use super::types::{ConnectionStatus, PostgrestError, ProbeError};
use crate::domain::{Profile, Record};

/// Column selection for the probe; only a row count is requested
const PROBE_SELECT: &str = "count";

impl SupabaseClient {
    /// Issue a single bounded read and classify the outcome.
    ///
    /// Never returns an error: every failure is folded into the status.
    pub async fn test_connection(&self) -> ConnectionStatus {
        debug!("Testing connection to {}", self.base_url);

        match self.probe().await {
            Ok(()) => {
                info!("Connection test successful");
                ConnectionStatus::ok()
            }
            Err(err) => {
                let detail = err.to_string();
                let status = err.into_status();
                if status.success {
                    info!("Connection test successful (auth required): {}", detail);
                } else {
                    warn!("Connection test failed: {}", detail);
                }
                status
            }
        }
    }

    /// Run the probe query, racing it against the probe timeout.
    ///
    /// The outcome is decided by the status line. An error body is read only
    /// within the remaining budget; if it cannot be read the error is
    /// classified without it. The request future is dropped, cancelling it,
    /// when the timer wins.
    pub async fn probe(&self) -> Result<(), ProbeError> {
        let limit = self.probe_timeout;
        let deadline = Instant::now() + limit;

        let mut url = self.table_url(Profile::TABLE)?;
        url.query_pairs_mut()
            .append_pair("select", PROBE_SELECT)
            .append_pair("limit", "1");

        let response = match timeout_at(deadline, self.rest_get(url).send()).await {
            Ok(result) => result?,
            Err(_) => return Err(ProbeError::Timeout(limit)),
        };
        let status = response.status();
        debug!("Probe response status: {}", status);

        if status.is_success() {
            // The row count itself is not needed; dropping the response releases it.
            return Ok(());
        }

        let body = match timeout_at(deadline, response.text()).await {
            Ok(Ok(body)) => body,
            Ok(Err(e)) => {
                debug!("Failed to read error body: {}", e);
                String::new()
            }
            Err(_) => {
                debug!("Error body not received within {:?}", limit);
                String::new()
            }
        };
        Err(PostgrestError::from_http_response(status.as_u16(), &body).into())
    }
}
