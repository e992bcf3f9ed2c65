//! # Tests Module
//!
//! Behavior tests for the retweeter facade, driven through a scripted
//! in-memory transport so no test ever reaches the network.
//!
//! ## Test Categories
//!
//! ### Facade Tests
//! - Search result mapping, the empty sentinel, and count handling
//! - Status posting with entity decoding and truncation
//! - Repost composition
//! - Mention-based following and the single-candidate decision
//! - Direct message cleanup and its report
//! - Credential verification as the gate for a full pass
//!
//! ### Configuration Tests
//! - Credential loading from environment variables
//! - Bot setting defaults and handle normalization
//!
//! ## Test Environment
//!
//! Each test scripts the exact responses its scenario needs; an
//! unscripted request fails the call, which doubles as a "no further
//! requests went out" assertion. Tests that mutate environment
//! variables serialize on a process-wide lock because the variables
//! are shared state.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::{mask_token, BotConfig, Credentials};
use crate::transport::{endpoints, ApiResponse, Transport};
use crate::twitter::{DeletionReport, Retweeter, SearchResult, UserProfile};

/// One request the mock saw: verb, endpoint, and the parameter pairs.
type RecordedCall = (String, String, Vec<(String, String)>);

/// Scripted transport for driving the facade without a network.
///
/// Every call consumes the next queued response and is recorded, so a
/// test can assert both what came back and which requests went out, in
/// order.
struct MockTransport {
    script: Mutex<VecDeque<Result<Value, String>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    fn new() -> Self {
        MockTransport {
            script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queues a JSON body to serve for the next request.
    fn respond(self, body: Value) -> Self {
        self.script.lock().unwrap().push_back(Ok(body));
        self
    }

    /// Queues a transport-level failure for the next request.
    fn fail(self, message: &str) -> Self {
        self.script.lock().unwrap().push_back(Err(message.to_string()));
        self
    }

    /// Returns every request issued so far.
    fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn serve(
        &self,
        verb: &str,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>> {
        self.calls.lock().unwrap().push((
            verb.to_string(),
            endpoint.to_string(),
            params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ));
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(body)) => Ok(ApiResponse::new(body)),
            Some(Err(message)) => Err(message.into()),
            None => Err(format!("unscripted request to '{}'", endpoint).into()),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>> {
        self.serve("GET", endpoint, params)
    }

    async fn post(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>> {
        self.serve("POST", endpoint, params)
    }
}

/// Wraps a scripted transport in a facade with the repost throttle off.
fn bot(mock: MockTransport) -> Retweeter<MockTransport> {
    Retweeter::new(mock).with_repost_delay(Duration::ZERO)
}

/// Builds a search response body in the wire shape the endpoint uses.
fn search_body(results: Vec<Value>) -> Value {
    json!({ "results": results })
}

/// Builds one search result entry.
fn mention(author: &str, id: u64, text: &str) -> Value {
    json!({ "from_user": author, "id": id, "text": text })
}

/// Drives a full pass the way the runner binary does: verification
/// gates everything that follows.
async fn run_pass(bot: &Retweeter<MockTransport>) -> bool {
    if bot.verify_access().await.is_err() {
        return false;
    }
    if !bot.search_and_repost("rustlang", "RT").await {
        return false;
    }
    bot.follow_mentioners("mybot", 3).await
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Tests that a single-result search maps the wire fields onto
/// `SearchResult`, with the numeric id normalized to a string.
#[tokio::test]
async fn test_search_maps_first_result() {
    let bot = bot(MockTransport::new()
        .respond(search_body(vec![mention("bob", 123, "hello world")])));

    let hit = bot.search_tweet("rustlang").await;

    assert_eq!(
        hit,
        Some(SearchResult {
            author: "bob".to_string(),
            id: "123".to_string(),
            text: "hello world".to_string(),
        })
    );
    let calls = bot.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "GET");
    assert_eq!(calls[0].1, endpoints::SEARCH);
    assert_eq!(calls[0].2, vec![("q".to_string(), "rustlang".to_string())]);
}

/// Tests that an empty result list collapses to `None` rather than an
/// empty vector.
#[tokio::test]
async fn test_search_empty_results_return_sentinel() {
    let bot = bot(MockTransport::new().respond(search_body(vec![])));

    assert_eq!(bot.search_tweets("nobody-says-this", 5).await, None);
}

/// Tests that a transport failure during search degrades to the same
/// `None` sentinel as an empty result.
#[tokio::test]
async fn test_search_transport_error_returns_sentinel() {
    let bot = bot(MockTransport::new().fail("connection reset"));

    assert_eq!(bot.search_tweet("rustlang").await, None);
}

/// Tests that an in-body API error is treated as no results.
#[tokio::test]
async fn test_search_error_response_returns_sentinel() {
    let bot = bot(MockTransport::new()
        .respond(json!({ "error": "Could not authenticate you." })));

    assert_eq!(bot.search_tweet("rustlang").await, None);
}

/// Tests that asking for zero results still issues the search request
/// and only then discards what came back.
#[tokio::test]
async fn test_search_zero_count_still_calls_endpoint() {
    let bot = bot(MockTransport::new()
        .respond(search_body(vec![mention("bob", 1, "hi")])));

    assert_eq!(bot.search_tweets("rustlang", 0).await, None);
    assert_eq!(bot.transport().calls().len(), 1);
}

/// Tests that a count smaller than the result list takes the first N
/// entries in response order.
#[tokio::test]
async fn test_search_takes_first_n_in_order() {
    let bot = bot(MockTransport::new().respond(search_body(vec![
        mention("ann", 1, "first"),
        mention("bob", 2, "second"),
        mention("cid", 3, "third"),
    ])));

    let hits = bot.search_tweets("rustlang", 2).await.unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].text, "first");
    assert_eq!(hits[1].text, "second");
}

/// Tests that a count larger than the result list returns everything
/// available without padding.
#[tokio::test]
async fn test_search_caps_at_available_results() {
    let bot = bot(MockTransport::new().respond(search_body(vec![
        mention("ann", 1, "first"),
        mention("bob", 2, "second"),
    ])));

    let hits = bot.search_tweets("rustlang", 10).await.unwrap();

    assert_eq!(hits.len(), 2);
}

/// Tests that string ids pass through untouched while numeric ids are
/// stringified.
#[tokio::test]
async fn test_search_normalizes_ids() {
    let bot = bot(MockTransport::new().respond(json!({
        "results": [
            { "from_user": "ann", "id": 123, "text": "numeric" },
            { "from_user": "bob", "id": "456", "text": "string" },
        ]
    })));

    let hits = bot.search_tweets("rustlang", 2).await.unwrap();

    assert_eq!(hits[0].id, "123");
    assert_eq!(hits[1].id, "456");
}

// ---------------------------------------------------------------------------
// Posting
// ---------------------------------------------------------------------------

/// Tests that a short status is posted exactly as given.
#[tokio::test]
async fn test_post_short_text_sent_unchanged() {
    let bot = bot(MockTransport::new().respond(json!({ "id": 99 })));

    assert!(bot.post_tweet("hello world").await);

    let calls = bot.transport().calls();
    assert_eq!(calls[0].0, "POST");
    assert_eq!(calls[0].1, endpoints::STATUS_UPDATE);
    assert_eq!(
        calls[0].2,
        vec![("status".to_string(), "hello world".to_string())]
    );
}

/// Tests that HTML entities are decoded before the length check, so
/// the budget applies to the text as it will actually render.
#[tokio::test]
async fn test_post_decodes_entities_then_truncates() {
    let bot = bot(MockTransport::new().respond(json!({ "id": 99 })));
    let long = format!("R &amp; D {}", "x".repeat(140));

    assert!(bot.post_tweet(&long).await);

    let calls = bot.transport().calls();
    let status = &calls[0].2[0].1;
    assert_eq!(status.chars().count(), 140);
    assert!(status.starts_with("R & D "));
    assert!(status.ends_with("..."));
    assert!(!status.contains("&amp;"));
}

/// Tests that an in-body API error turns into a `false` outcome.
#[tokio::test]
async fn test_post_returns_false_on_error_response() {
    let bot = bot(MockTransport::new()
        .respond(json!({ "error": "Status is a duplicate." })));

    assert!(!bot.post_tweet("hello again").await);
}

/// Tests that a transport failure while posting reports `false`.
#[tokio::test]
async fn test_post_returns_false_on_transport_error() {
    let bot = bot(MockTransport::new().fail("connection reset"));

    assert!(!bot.post_tweet("hello").await);
}

/// Tests that a repost composes the prefix, author, and text in the
/// attribution format before posting.
#[tokio::test]
async fn test_repost_composes_prefix_author_text() {
    let bot = bot(MockTransport::new()
        .respond(search_body(vec![mention("bob", 7, "ship it")]))
        .respond(json!({ "id": 100 })));

    assert!(bot.search_and_repost("rustlang", "RT").await);

    let calls = bot.transport().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1, endpoints::SEARCH);
    assert_eq!(calls[1].1, endpoints::STATUS_UPDATE);
    assert_eq!(
        calls[1].2,
        vec![("status".to_string(), "RT @bob: ship it".to_string())]
    );
}

/// Tests that a custom prefix lands in the composed status verbatim.
#[tokio::test]
async fn test_repost_honors_custom_prefix() {
    let bot = bot(MockTransport::new()
        .respond(search_body(vec![mention("bob", 7, "ship it")]))
        .respond(json!({ "id": 100 })));

    assert!(bot.search_and_repost("rustlang", "ICYMI").await);

    let calls = bot.transport().calls();
    assert_eq!(calls[1].2[0].1, "ICYMI @bob: ship it");
}

/// Tests that an empty search short-circuits the repost: nothing is
/// posted and the call reports `false`.
#[tokio::test]
async fn test_repost_skips_post_when_search_empty() {
    let bot = bot(MockTransport::new().respond(search_body(vec![])));

    assert!(!bot.search_and_repost("nobody-says-this", "RT").await);
    assert_eq!(bot.transport().calls().len(), 1);
}

// ---------------------------------------------------------------------------
// Following
// ---------------------------------------------------------------------------

/// Tests the full follow path: the bot's own mention is skipped, the
/// first other author is checked, found unfollowed, and followed. The
/// third mention is never looked at.
#[tokio::test]
async fn test_follow_skips_self_then_follows_first_candidate() {
    let bot = bot(MockTransport::new()
        .respond(search_body(vec![
            mention("mybot", 1, "@mybot hi from myself"),
            mention("bob", 2, "@mybot nice bot"),
            mention("carol", 3, "@mybot me too"),
        ]))
        .respond(json!(false))
        .respond(json!({ "id": 555, "screen_name": "bob" })));

    assert!(bot.follow_mentioners("mybot", 3).await);

    let calls = bot.transport().calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0].1, endpoints::SEARCH);
    assert_eq!(calls[0].2, vec![("q".to_string(), "@mybot".to_string())]);
    assert_eq!(calls[1].1, endpoints::FRIENDSHIP_EXISTS);
    assert_eq!(
        calls[1].2,
        vec![
            ("user_a".to_string(), "mybot".to_string()),
            ("user_b".to_string(), "bob".to_string()),
        ]
    );
    assert_eq!(calls[2].0, "POST");
    assert_eq!(calls[2].1, endpoints::FRIENDSHIP_CREATE);
    assert_eq!(calls[2].2, vec![("id".to_string(), "bob".to_string())]);
}

/// Tests that an already-followed candidate counts as success without
/// a follow request going out.
#[tokio::test]
async fn test_follow_returns_true_when_already_following() {
    let bot = bot(MockTransport::new()
        .respond(search_body(vec![mention("bob", 2, "@mybot nice bot")]))
        .respond(json!(true)));

    assert!(bot.follow_mentioners("mybot", 3).await);
    assert_eq!(bot.transport().calls().len(), 2);
}

/// Tests that a rejected follow request yields `false`.
#[tokio::test]
async fn test_follow_returns_false_when_create_rejected() {
    let bot = bot(MockTransport::new()
        .respond(search_body(vec![mention("bob", 2, "@mybot nice bot")]))
        .respond(json!(false))
        .respond(json!({ "error": "You are unable to follow more people." })));

    assert!(!bot.follow_mentioners("mybot", 3).await);
}

/// Tests that a failed friendship lookup resolves the candidate as
/// `false` instead of falling through to the next mention.
#[tokio::test]
async fn test_follow_returns_false_when_lookup_fails() {
    let bot = bot(MockTransport::new()
        .respond(search_body(vec![
            mention("bob", 2, "@mybot nice bot"),
            mention("carol", 3, "@mybot me too"),
        ]))
        .fail("connection reset"));

    assert!(!bot.follow_mentioners("mybot", 3).await);
    assert_eq!(bot.transport().calls().len(), 2);
}

/// Tests that a sample made up entirely of the bot's own tweets ends
/// with nobody followed.
#[tokio::test]
async fn test_follow_returns_false_when_only_self_mentions() {
    let bot = bot(MockTransport::new().respond(search_body(vec![
        mention("mybot", 1, "@mybot talking to myself"),
        mention("mybot", 2, "@mybot again"),
    ])));

    assert!(!bot.follow_mentioners("mybot", 3).await);
    assert_eq!(bot.transport().calls().len(), 1);
}

/// Tests that no mentions at all is a quiet `false`.
#[tokio::test]
async fn test_follow_returns_false_without_mentions() {
    let bot = bot(MockTransport::new().respond(search_body(vec![])));

    assert!(!bot.follow_mentioners("mybot", 3).await);
}

// ---------------------------------------------------------------------------
// Direct messages
// ---------------------------------------------------------------------------

/// Tests that every fetched message gets exactly one destroy request,
/// in fetch order, and that mixed outcomes land in the report without
/// stopping the pass.
#[tokio::test]
async fn test_delete_issues_one_destroy_per_message_in_order() {
    let bot = bot(MockTransport::new()
        .respond(json!([{ "id": 11 }, { "id": 22 }, { "id": 33 }]))
        .respond(json!({ "id": 11 }))
        .respond(json!({ "error": "Sorry, that page does not exist" }))
        .fail("connection reset"));

    let report = bot.delete_all_direct_messages_report().await;

    assert_eq!(
        report,
        DeletionReport {
            fetched: 3,
            deleted: 1,
            failed: vec!["22".to_string(), "33".to_string()],
        }
    );
    let calls = bot.transport().calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0].1, endpoints::DIRECT_MESSAGES);
    assert_eq!(calls[0].2, vec![("count".to_string(), "200".to_string())]);
    for (call, id) in calls[1..].iter().zip(["11", "22", "33"]) {
        assert_eq!(call.0, "POST");
        assert_eq!(call.1, endpoints::DIRECT_MESSAGE_DESTROY);
        assert_eq!(call.2, vec![("id".to_string(), id.to_string())]);
    }
}

/// Tests that an empty inbox produces a zero report and no destroy
/// requests.
#[tokio::test]
async fn test_delete_empty_inbox_issues_no_destroys() {
    let bot = bot(MockTransport::new().respond(json!([])));

    let report = bot.delete_all_direct_messages_report().await;

    assert_eq!(report, DeletionReport::default());
    assert_eq!(bot.transport().calls().len(), 1);
}

/// Tests that a failed inbox fetch ends the pass before any destroys.
#[tokio::test]
async fn test_delete_fetch_failure_reports_nothing() {
    let bot = bot(MockTransport::new().fail("connection reset"));

    let report = bot.delete_all_direct_messages_report().await;

    assert_eq!(report, DeletionReport::default());
    assert_eq!(bot.transport().calls().len(), 1);
}

/// Tests that the report-free entry point still performs the
/// deletions.
#[tokio::test]
async fn test_delete_without_report_still_deletes() {
    let bot = bot(MockTransport::new()
        .respond(json!([{ "id": 11 }]))
        .respond(json!({ "id": 11 })));

    bot.delete_all_direct_messages().await;

    assert_eq!(bot.transport().calls().len(), 2);
}

// ---------------------------------------------------------------------------
// Credential verification
// ---------------------------------------------------------------------------

/// Tests that a clean credential check resolves `Ok`.
#[tokio::test]
async fn test_verify_access_accepts_clean_response() {
    let bot = bot(MockTransport::new()
        .respond(json!({ "id": 777, "screen_name": "mybot" })));

    assert!(bot.verify_access().await.is_ok());
}

/// Tests that a transport failure during verification is an error,
/// not a silent `false`.
#[tokio::test]
async fn test_verify_access_fails_on_transport_error() {
    let bot = bot(MockTransport::new().fail("connection reset"));

    assert!(bot.verify_access().await.is_err());
}

/// Tests that an in-body rejection carries the API's message out in
/// the error.
#[tokio::test]
async fn test_verify_access_fails_on_error_response() {
    let bot = bot(MockTransport::new()
        .respond(json!({ "error": "Invalid / expired Token" })));

    let err = bot.verify_access().await.unwrap_err();

    assert!(err.to_string().contains("Invalid / expired Token"));
}

/// Tests that a failed verification stops a pass before any other
/// request is made.
#[tokio::test]
async fn test_verify_failure_gates_the_pass() {
    let bot = bot(MockTransport::new().fail("connection reset"));

    assert!(!run_pass(&bot).await);

    let calls = bot.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, endpoints::VERIFY_CREDENTIALS);
}

/// Tests a full pass end to end: verify, repost, then follow, with
/// every request in the expected order.
#[tokio::test]
async fn test_full_pass_runs_in_order() {
    let bot = bot(MockTransport::new()
        .respond(json!({ "id": 777, "screen_name": "mybot" }))
        .respond(search_body(vec![mention("bob", 7, "ship it")]))
        .respond(json!({ "id": 100 }))
        .respond(search_body(vec![mention("carol", 8, "@mybot neat")]))
        .respond(json!(false))
        .respond(json!({ "id": 556, "screen_name": "carol" })));

    assert!(run_pass(&bot).await);

    let endpoints_hit: Vec<String> = bot
        .transport()
        .calls()
        .into_iter()
        .map(|(_, endpoint, _)| endpoint)
        .collect();
    assert_eq!(
        endpoints_hit,
        vec![
            endpoints::VERIFY_CREDENTIALS,
            endpoints::SEARCH,
            endpoints::STATUS_UPDATE,
            endpoints::SEARCH,
            endpoints::FRIENDSHIP_EXISTS,
            endpoints::FRIENDSHIP_CREATE,
        ]
    );
}

// ---------------------------------------------------------------------------
// User lookup and raw passthrough
// ---------------------------------------------------------------------------

/// Tests that a profile lookup maps the wire fields onto
/// `UserProfile`.
#[tokio::test]
async fn test_lookup_users_maps_profiles() {
    let bot = bot(MockTransport::new().respond(json!([
        { "id_str": "9", "screen_name": "bob", "name": "Bob Builder" }
    ])));

    let profiles = bot.lookup_users("bob").await.unwrap();

    assert_eq!(
        profiles,
        vec![UserProfile {
            id: "9".to_string(),
            handle: "bob".to_string(),
            name: "Bob Builder".to_string(),
        }]
    );
}

/// Tests that an error body from the lookup endpoint collapses to
/// `None`.
#[tokio::test]
async fn test_lookup_users_error_response_returns_sentinel() {
    let bot = bot(MockTransport::new().respond(json!({
        "errors": [{ "code": 17, "message": "No user matches for specified terms." }]
    })));

    assert_eq!(bot.lookup_users("nobody").await, None);
}

/// Tests that an empty profile list is reported as `None` rather than
/// an empty vector.
#[tokio::test]
async fn test_lookup_users_empty_list_returns_sentinel() {
    let bot = bot(MockTransport::new().respond(json!([])));

    assert_eq!(bot.lookup_users("nobody").await, None);
}

/// Tests that the raw GET escape hatch passes the response through
/// without interpretation.
#[tokio::test]
async fn test_raw_get_passes_response_through() {
    let bot = bot(MockTransport::new()
        .respond(json!({ "resources": { "search": {} } })));

    let response = bot
        .raw_get("application/rate_limit_status", &[])
        .await
        .unwrap();

    assert_eq!(response.body()["resources"]["search"], json!({}));
    assert_eq!(bot.transport().calls()[0].0, "GET");
}

// ---------------------------------------------------------------------------
// Environment configuration
// ---------------------------------------------------------------------------

/// Serializes tests that mutate process environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const CREDENTIAL_VARS: [&str; 4] = [
    "xapi_consumer_key",
    "xapi_consumer_secret",
    "xapi_access_token",
    "xapi_access_token_secret",
];

fn set_all_credentials() {
    for var in CREDENTIAL_VARS {
        std::env::set_var(var, format!("{}_value_0123456789", var));
    }
}

fn clear_all_credentials() {
    for var in CREDENTIAL_VARS {
        std::env::remove_var(var);
    }
}

/// Tests that credentials load from the environment when all four
/// variables are present.
#[test]
fn test_credentials_from_env_loads_all_vars() {
    let _guard = ENV_LOCK.lock().unwrap();
    set_all_credentials();

    let credentials = Credentials::from_env().unwrap();

    assert_eq!(
        credentials.consumer_key,
        "xapi_consumer_key_value_0123456789"
    );
    assert_eq!(
        credentials.access_token_secret,
        "xapi_access_token_secret_value_0123456789"
    );
    clear_all_credentials();
}

/// Tests that a missing variable fails the load and names the
/// variable in the error.
#[test]
fn test_credentials_from_env_requires_every_var() {
    let _guard = ENV_LOCK.lock().unwrap();
    set_all_credentials();
    std::env::remove_var("xapi_access_token");

    let err = Credentials::from_env().unwrap_err();

    assert!(err.to_string().contains("xapi_access_token"));
    clear_all_credentials();
}

/// Tests that the bot settings fall back to the stock prefix and
/// character budget, and that a leading `@` on the handle is dropped.
#[test]
fn test_bot_config_defaults_and_handle_normalization() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::set_var("BOT_HANDLE", "@mybot");
    std::env::set_var("SEARCH_QUERY", "rustlang -@mybot");
    std::env::remove_var("REPOST_PREFIX");
    std::env::remove_var("STATUS_CHAR_LIMIT");

    let config = BotConfig::from_env().unwrap();

    assert_eq!(config.handle, "mybot");
    assert_eq!(config.search_query, "rustlang -@mybot");
    assert_eq!(config.repost_prefix, "RT");
    assert_eq!(config.char_limit, 140);
    std::env::remove_var("BOT_HANDLE");
    std::env::remove_var("SEARCH_QUERY");
}

/// Tests that environment overrides replace the stock prefix and
/// character budget.
#[test]
fn test_bot_config_reads_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::set_var("BOT_HANDLE", "mybot");
    std::env::set_var("SEARCH_QUERY", "rustlang");
    std::env::set_var("REPOST_PREFIX", "ICYMI");
    std::env::set_var("STATUS_CHAR_LIMIT", "280");

    let config = BotConfig::from_env().unwrap();

    assert_eq!(config.repost_prefix, "ICYMI");
    assert_eq!(config.char_limit, 280);
    std::env::remove_var("BOT_HANDLE");
    std::env::remove_var("SEARCH_QUERY");
    std::env::remove_var("REPOST_PREFIX");
    std::env::remove_var("STATUS_CHAR_LIMIT");
}

/// Tests that token masking keeps only the edges of a long token.
#[test]
fn test_mask_token_hides_the_middle() {
    let masked = mask_token("1234567890abcdefghij");

    assert_eq!(masked, "12345678...cdefghij");
    assert!(!masked.contains("90ab"));

    assert_eq!(mask_token("short"), "short...");
}
