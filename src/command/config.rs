use anyhow::Result;

use supabase_gate::SupabaseConfig;

pub fn run_config(config: &SupabaseConfig) -> Result<()> {
    let check = config.check();

    println!("Supabase config check:");
    println!("   URL: {}", check.url_preview);
    println!("   Key length: {}", check.key_length);

    if check.valid {
        println!("✅ Supabase config valid");
    } else {
        println!("❌ Supabase config invalid");
        if !check.has_url {
            println!("   SUPABASE_URL is not set.");
        } else if !config.url().starts_with("https://") {
            println!("   SUPABASE_URL must start with https://");
        }
        if !check.has_key {
            println!("   SUPABASE_ANON_KEY is not set.");
        } else if check.key_length <= 20 {
            println!("   SUPABASE_ANON_KEY looks too short.");
        }
    }

    Ok(())
}
