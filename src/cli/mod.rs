mod args;

pub use args::{Cli, Commands};

use supabase_gate::SupabaseConfig;

/// Resolve the configuration from CLI flags, falling back to the environment
/// (including the `VITE_` names clap does not know about). Empty flags count
/// as unset.
pub fn resolve_config(cli: &Cli) -> SupabaseConfig {
    merge_config(
        cli.url.as_deref(),
        cli.anon_key.as_deref(),
        SupabaseConfig::from_env(),
    )
}

fn merge_config(
    url: Option<&str>,
    anon_key: Option<&str>,
    fallback: SupabaseConfig,
) -> SupabaseConfig {
    SupabaseConfig::new(
        pick(url, fallback.url()),
        pick(anon_key, fallback.anon_key()),
    )
}

fn pick<'a>(flag: Option<&'a str>, fallback: &'a str) -> String {
    flag.filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
