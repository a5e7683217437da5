//! Integration tests that call the real Claude API.
//!
//! These tests require ANTHROPIC_API_KEY to be set (via .env file or environment).
//! Run with: `cargo test -p buddies-core --test api_integration -- --ignored`

use std::time::Duration;

use buddies_core::encourage::{fetch_encouragement, ClaudeEncourager, Encourager};
use buddies_core::GameConfig;

fn setup() -> Option<GameConfig> {
    let _ = dotenvy::dotenv();
    let config = GameConfig::from_env();
    if config.api_key.is_none() {
        eprintln!("Skipping test: ANTHROPIC_API_KEY not set");
        return None;
    }
    Some(config)
}

#[tokio::test]
#[ignore]
async fn test_live_encouragement_is_short() {
    let Some(config) = setup() else { return };
    let encourager = ClaudeEncourager::from_config(&config).expect("client should build");

    let text = encourager
        .encourage(true)
        .await
        .expect("service should answer");
    assert!(!text.is_empty());
    assert!(text.split_whitespace().count() <= 12, "too long: {text}");
}

#[tokio::test]
#[ignore]
async fn test_live_fetch_never_fails() {
    let Some(config) = setup() else { return };
    let encourager = ClaudeEncourager::from_config(&config).expect("client should build");

    let text = fetch_encouragement(&encourager, false, Duration::from_secs(10)).await;
    assert!(!text.is_empty());
}
