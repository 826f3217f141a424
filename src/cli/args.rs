use clap::{Parser, Subcommand};

/// Supabase configuration check and connection probe
#[derive(Parser)]
#[command(name = "supabase-gate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Supabase project URL
    #[arg(long, env = "SUPABASE_URL", global = true)]
    pub url: Option<String>,

    /// Supabase anon key
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true, global = true)]
    pub anon_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show whether the configuration looks usable
    Config,
    /// Probe the connection to Supabase (default)
    Status {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
