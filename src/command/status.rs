use anyhow::{Context, Result};

use supabase_gate::{ConnectionGate, SupabaseConfig};

/// Probe the connection and print a banner. Returns whether the probe passed.
pub async fn run_status(config: SupabaseConfig, json: bool) -> Result<bool> {
    let gate = ConnectionGate::from_config(config);
    let status = gate.test_connection().await;

    if json {
        let out = serde_json::to_string_pretty(&status).context("Failed to serialize status")?;
        println!("{}", out);
        return Ok(status.success);
    }

    if status.success {
        println!("✅ Connected to Supabase");
        if let Some(client) = gate.client() {
            println!("   URL: {}", client.base_url());
        }
    } else {
        println!(
            "❌ {}",
            status.error.as_deref().unwrap_or("Connection test failed")
        );
        if !gate.is_configured() {
            println!("   Set SUPABASE_URL and SUPABASE_ANON_KEY, or run 'supabase-gate config'.");
        }
    }

    Ok(status.success)
}
