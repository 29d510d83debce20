use std::collections::HashSet;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::SearchConfig;
use crate::models::MemeResult;
use crate::phrases;

/// Brand term and suffix wrapped around every search phrase.
const QUERY_BRAND: &str = "무한도전";
const QUERY_SUFFIX: &str = "짤";
/// Results requested per phrase query.
const RESULTS_PER_QUERY: u32 = 10;

const BLOCKED_DOMAINS: [&str; 2] = ["tiktok.com", "instagram.com"];
const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

/// One raw result from the image search API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub mime: Option<String>,
    #[serde(rename = "displayLink", default)]
    pub display_link: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

/// Retrieve meme images for a classified label.
///
/// Issues one image search per phrase, in phrase order, and aggregates the
/// filtered results with cross-phrase deduplication. Unknown labels fall
/// back to a single-phrase list containing the label itself, so an
/// unrecognized classification yields a literal search rather than an error.
/// A failed search for any phrase aborts the whole retrieval.
pub async fn retrieve(
    client: &reqwest::Client,
    config: &SearchConfig,
    label: &str,
) -> Result<Vec<MemeResult>> {
    let phrase_list: Vec<&str> = match phrases::phrases_for(label) {
        Some(list) => list.to_vec(),
        None => vec![label],
    };

    let mut seen = HashSet::new();
    let mut memes = Vec::new();

    for phrase in phrase_list {
        let items = fetch_items(client, config, phrase).await?;
        collect_memes(phrase, &items, &mut seen, &mut memes);
    }

    Ok(memes)
}

/// Search query for one phrase, also used as the result title.
pub fn build_query(phrase: &str) -> String {
    format!("{QUERY_BRAND} {phrase} {QUERY_SUFFIX}")
}

async fn fetch_items(
    client: &reqwest::Client,
    config: &SearchConfig,
    phrase: &str,
) -> Result<Vec<SearchItem>> {
    let api_key = config.api_key.as_deref().unwrap_or_default();
    let cx_id = config.cx_id.as_deref().unwrap_or_default();
    let query = build_query(phrase);
    let num = RESULTS_PER_QUERY.to_string();

    let resp = client
        .get(&config.base_url)
        .query(&[
            ("key", api_key),
            ("cx", cx_id),
            ("q", query.as_str()),
            ("searchType", "image"),
            ("num", num.as_str()),
        ])
        .send()
        .await
        .with_context(|| format!("Failed to call image search API for query '{query}'"))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Image search API returned {status}: {body}");
    }

    let body: SearchResponse = resp.json().await?;
    Ok(body.items)
}

/// All filter conditions for one candidate result: a non-empty link with an
/// image MIME type and a known image extension, not hosted on a blocked
/// domain (substring match on the display domain).
pub fn keep_item(item: &SearchItem) -> bool {
    let Some(link) = item.link.as_deref() else {
        return false;
    };
    if link.is_empty() {
        return false;
    }
    if !item.mime.as_deref().unwrap_or_default().starts_with("image/") {
        return false;
    }
    let lower = link.to_lowercase();
    if !IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        return false;
    }
    let domain = item.display_link.as_deref().unwrap_or_default();
    if BLOCKED_DOMAINS.iter().any(|d| domain.contains(d)) {
        return false;
    }
    true
}

/// Append the filtered results of one phrase query to the aggregate.
///
/// `seen` spans all phrases of a single retrieval: a link that already
/// appeared under an earlier phrase is never added again, so each link
/// keeps the position and title of its first occurrence.
pub fn collect_memes(
    phrase: &str,
    items: &[SearchItem],
    seen: &mut HashSet<String>,
    memes: &mut Vec<MemeResult>,
) {
    for item in items {
        if !keep_item(item) {
            continue;
        }
        let Some(link) = item.link.as_deref() else {
            continue;
        };
        if !seen.insert(link.to_string()) {
            continue;
        }
        memes.push(MemeResult {
            id: link.to_string(),
            image_url: link.to_string(),
            title: build_query(phrase),
        });
    }
}
