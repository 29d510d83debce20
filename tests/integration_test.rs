//! Integration tests for the meme recommendation pipeline.
//!
//! These exercise the pure stages (phrase lookup, query construction,
//! filtering, deduplication) and the HTTP surface without requiring live
//! LLM or search APIs.

use std::collections::HashSet;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use meme_search::api;
use meme_search::config::Config;
use meme_search::phrases;
use meme_search::search::images::{build_query, collect_memes, keep_item, SearchItem};
use meme_search::state::AppState;

fn item(link: &str, mime: &str, domain: &str) -> SearchItem {
    SearchItem {
        link: Some(link.to_string()),
        mime: Some(mime.to_string()),
        display_link: Some(domain.to_string()),
        title: Some("engine title, ignored".to_string()),
    }
}

#[test]
fn test_sadness_label_expands_to_four_queries() {
    let phrases = phrases::phrases_for("슬픔").unwrap();
    let queries: Vec<String> = phrases.iter().map(|p| build_query(p)).collect();
    assert_eq!(
        queries,
        [
            "무한도전 슬퍼하는 짤",
            "무한도전 우울한 짤",
            "무한도전 슬픈 짤",
            "무한도전 마음아픈 짤",
        ]
    );
}

#[test]
fn test_unrecognized_label_is_used_as_literal_phrase() {
    // "중립" is not a canonical label, so the retriever falls back to a
    // single-phrase list containing the label itself.
    assert!(phrases::phrases_for("중립").is_none());
    assert_eq!(build_query("중립"), "무한도전 중립 짤");
}

#[test]
fn test_aggregation_filters_and_dedupes_across_phrases() {
    // Simulate the per-phrase results of a 슬픔 retrieval. One link repeats
    // under a later phrase, and several candidates must be filtered out.
    let phrase1 = vec![
        item("https://a.com/sad1.jpg", "image/jpeg", "a.com"),
        item("https://a.com/page.html", "text/html", "a.com"),
        item("https://a.com/sad2.webp", "image/webp", "a.com"),
    ];
    let phrase2 = vec![
        item("https://a.com/sad1.jpg", "image/jpeg", "a.com"),
        item("https://b.com/gloomy.png", "image/png", "b.com"),
        item("https://c.com/clip.jpg", "image/jpeg", "video.tiktok.com"),
    ];

    let mut seen = HashSet::new();
    let mut memes = Vec::new();
    collect_memes("슬퍼하는", &phrase1, &mut seen, &mut memes);
    collect_memes("우울한", &phrase2, &mut seen, &mut memes);

    let ids: Vec<&str> = memes.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["https://a.com/sad1.jpg", "https://b.com/gloomy.png"]);

    // The repeated link keeps its first-phrase position and title
    assert_eq!(memes[0].title, "무한도전 슬퍼하는 짤");
    assert_eq!(memes[1].title, "무한도전 우울한 짤");
    // id doubles as the image URL
    assert_eq!(memes[0].id, memes[0].image_url);
}

#[test]
fn test_title_comes_from_query_not_engine_title() {
    let items = vec![item("https://a.com/joy.gif", "image/gif", "a.com")];
    let mut seen = HashSet::new();
    let mut memes = Vec::new();
    collect_memes("기뻐하는", &items, &mut seen, &mut memes);

    assert_eq!(memes[0].title, "무한도전 기뻐하는 짤");
}

#[test]
fn test_filter_conditions_individually() {
    assert!(keep_item(&item("https://a.com/x.jpg", "image/jpeg", "a.com")));
    assert!(!keep_item(&item("https://a.com/x.jpg", "text/html", "a.com")));
    assert!(!keep_item(&item("https://a.com/x.webp", "image/webp", "a.com")));
    assert!(!keep_item(&item(
        "https://a.com/x.jpg",
        "image/jpeg",
        "www.instagram.com"
    )));
}

#[tokio::test]
async fn test_missing_emotion_text_is_rejected() {
    let state = AppState::new(Config::default()).unwrap();
    let app = api::router(state);

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/memes")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upstream_failure_returns_500_with_detail() {
    // Point the LLM at a closed local port so classification fails fast.
    let mut config = Config::default();
    config.llm.base_url = "http://127.0.0.1:9".to_string();

    let state = AppState::new(config).unwrap();
    let app = api::router(state);

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/memes?emotion_text=test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["detail"].as_str().is_some_and(|d| !d.is_empty()));
}
