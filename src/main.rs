//! # Retweeter
//!
//! A Rust automation bot that reposts search hits and follows back accounts
//! that mention it, over the Twitter/X API with OAuth 1.0a signed requests.
//!
//! One invocation runs one pass: verify credentials, repost the first hit
//! for the configured search query, follow one mentioning account. An
//! external scheduler (cron or similar) invokes the binary in a loop; the
//! facade's built-in delay throttles tight loops.
//!
//! ## Environment Variables
//!
//! Credentials (all required):
//! - `xapi_consumer_key`: Consumer Key (API Key)
//! - `xapi_consumer_secret`: Consumer Secret (API Secret)
//! - `xapi_access_token`: Access Token for the acting account
//! - `xapi_access_token_secret`: Access Token Secret
//!
//! Bot settings:
//! - `BOT_HANDLE`: the bot's screen name, without the leading `@` (required)
//! - `SEARCH_QUERY`: the search query whose first hit gets reposted
//!   (required; exclude the bot with a `-@handle` clause)
//! - `REPOST_PREFIX`: prefix for reposted text (defaults to `RT`)
//! - `STATUS_CHAR_LIMIT`: character budget for statuses (defaults to 140)

use log::{error, info};

use retweeter::{BotConfig, Credentials, OAuthTransport, Retweeter, MENTION_SAMPLE_SIZE};

/// Main entry point for the retweeter bot.
///
/// Loads configuration, builds the signed transport and the facade, then
/// runs one pass: credential verification (fatal on failure), one
/// search-and-repost, one follow-mentioners. Exits non-zero when
/// configuration or verification fails; action failures are logged and the
/// pass continues, matching the facade's boolean contract.
///
/// # Example Usage
///
/// ```bash
/// # One pass with info logging
/// RUST_LOG=info cargo run
///
/// # From cron, every ten minutes
/// */10 * * * * /usr/local/bin/retweeter
/// ```
#[tokio::main]
async fn main() {
    // Initialize the logging system
    env_logger::init();

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!("Failed to load credentials: {}", e);
            std::process::exit(1);
        }
    };

    let bot_config = match BotConfig::from_env() {
        Ok(bot_config) => bot_config,
        Err(e) => {
            error!("Failed to load bot settings: {}", e);
            std::process::exit(1);
        }
    };

    let transport = match OAuthTransport::new(credentials) {
        Ok(transport) => transport,
        Err(e) => {
            error!("Failed to build API transport: {}", e);
            std::process::exit(1);
        }
    };

    let bot = Retweeter::new(transport).with_char_limit(bot_config.char_limit);

    // Startup gate: nothing runs on unverified credentials.
    if let Err(e) = bot.verify_access().await {
        error!("Credential verification failed: {}", e);
        std::process::exit(1);
    }

    info!("Starting retweeter pass as @{}", bot_config.handle);

    let reposted = bot
        .search_and_repost(&bot_config.search_query, &bot_config.repost_prefix)
        .await;
    if reposted {
        info!("Reposted one hit for: {}", bot_config.search_query);
    } else {
        info!("Nothing reposted this pass");
    }

    let followed = bot
        .follow_mentioners(&bot_config.handle, MENTION_SAMPLE_SIZE)
        .await;
    if followed {
        info!("Followed back one mentioning account");
    } else {
        info!("No account followed this pass");
    }

    info!("Retweeter pass complete");
}
