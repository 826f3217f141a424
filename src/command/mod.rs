mod config;
mod status;

pub use config::run_config;
pub use status::run_status;
