//! Supabase configuration gate.
//!
//! Validates the project URL and anon key, builds a client only when they look
//! usable, and offers a single connectivity probe. Also declares the record
//! shapes (`Profile`, `Workflow`, `Analytics`) shared with calling code.

pub mod api;
pub mod config;
pub mod domain;
pub mod gate;

pub use api::{ConnectionStatus, SupabaseClient};
pub use config::{ConfigCheck, SupabaseConfig};
pub use domain::{Analytics, Profile, Record, Role, Workflow, WorkflowStatus};
pub use gate::ConnectionGate;
