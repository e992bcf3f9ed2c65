//! Direct Message Purge Script
//!
//! This script empties the bot account's direct message inbox: it fetches the
//! pending batch (up to 200 messages) and deletes each one, then prints a
//! report of what happened. The deletion is permanent, so it asks first.

use std::io::{self, Write};

use retweeter::{Credentials, OAuthTransport, Retweeter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    println!("🧹 Direct Message Purge Tool");
    println!("============================");

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            println!("❌ Failed to load credentials from environment: {}", e);
            println!("   Set xapi_consumer_key, xapi_consumer_secret,");
            println!("   xapi_access_token and xapi_access_token_secret first.");
            return Err(e);
        }
    };

    print!("⚠️  This permanently deletes every direct message in the inbox. Continue? [y/N]: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
        println!("🛑 Aborted, nothing deleted.");
        return Ok(());
    }

    let transport = OAuthTransport::new(credentials)?;
    let bot = Retweeter::new(transport);

    println!("🔍 Verifying credentials...");
    if let Err(e) = bot.verify_access().await {
        println!("💥 Credential verification failed: {}", e);
        return Err(e);
    }
    println!("✅ Credentials verified");

    println!("\n🚀 Purging direct messages...");
    let report = bot.delete_all_direct_messages_report().await;

    println!("📊 Purge report:");
    println!("{}", serde_json::to_string_pretty(&report)?);
    println!(
        "📬 Fetched {}, deleted {}, failed {}",
        report.fetched,
        report.deleted,
        report.failed.len()
    );

    if report.failed.is_empty() {
        println!("🎉 Inbox is clean.");
        Ok(())
    } else {
        println!("💥 Some messages could not be deleted: {:?}", report.failed);
        Err(format!("{} deletion(s) failed", report.failed.len()).into())
    }
}
