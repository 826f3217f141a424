//! HTTP client for a Supabase project.
//!
//! Only the connectivity probe is implemented here; querying and auth are
//! left to callers.

mod client;
mod probe;
mod types;

pub use client::{SupabaseClient, DEFAULT_PROBE_TIMEOUT};
pub use types::{
    ConnectionStatus, PostgrestError, ProbeError, DATABASE_FAILED_MESSAGE, NETWORK_ERROR_MESSAGE,
    NOT_CONFIGURED_MESSAGE, TIMEOUT_MESSAGE,
};
