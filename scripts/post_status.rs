//! Status Posting Script
//!
//! This script posts a single status from the bot account. Credentials come
//! from the usual environment variables; the status text is read from stdin.
//! Text longer than the character budget is truncated before posting.

use std::io::{self, Write};

use retweeter::{Credentials, OAuthTransport, Retweeter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    println!("🐦 Status Posting Tool");
    println!("======================");

    // Load credentials the same way the bot does
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            println!("❌ Failed to load credentials from environment: {}", e);
            println!("   Set xapi_consumer_key, xapi_consumer_secret,");
            println!("   xapi_access_token and xapi_access_token_secret first.");
            return Err(e);
        }
    };

    // Get the status text from the user
    print!("📝 Enter the status to post: ");
    io::stdout().flush()?;
    let mut text = String::new();
    io::stdin().read_line(&mut text)?;
    let text = text.trim();

    if text.is_empty() {
        println!("❌ Status text cannot be empty!");
        return Err("Status text is required".into());
    }

    println!("📏 Status length: {} characters", text.chars().count());

    let transport = OAuthTransport::new(credentials)?;
    let bot = Retweeter::new(transport);

    println!("🔍 Verifying credentials...");
    if let Err(e) = bot.verify_access().await {
        println!("💥 Credential verification failed: {}", e);
        return Err(e);
    }
    println!("✅ Credentials verified");

    println!("\n🚀 Posting your status...");
    if bot.post_tweet(text).await {
        println!("🎉 Success! Your status has been posted.");
        Ok(())
    } else {
        println!("💥 Failed to post the status. Run with RUST_LOG=debug for details.");
        Err("status post rejected".into())
    }
}
