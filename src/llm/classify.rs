use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;
use crate::phrases;

/// Classify a free-text emotion description into one of the canonical labels.
///
/// Returns either a canonical label or, when the model's reply contains no
/// known label, the raw trimmed reply itself. The retriever treats that
/// fallback as a literal search phrase rather than an error.
pub async fn classify(
    client: &reqwest::Client,
    config: &LlmConfig,
    text: &str,
) -> Result<String> {
    let labels: Vec<&str> = phrases::labels().collect();
    let prompt = format!(
        "당신은 감정 분석 전문가입니다.\n\
         아래 레이블 중 하나로 문장의 감정을 분류하고, 라벨만 정확히 출력하세요.\n\
         레이블: {labels:?}\n\
         문장: “{text}”"
    );

    let raw = call_chat(client, config, &prompt).await?;
    Ok(extract_label(&raw))
}

/// Scan the canonical labels in table order and return the first one that
/// occurs as a substring of the model's reply. The table order is the
/// documented tie-break when the reply mentions several labels. Falls back
/// to the raw trimmed reply when no label matches.
fn extract_label(raw: &str) -> String {
    let raw = raw.trim();
    for label in phrases::labels() {
        if raw.contains(label) {
            return label.to_string();
        }
    }
    raw.to_string()
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

async fn call_chat(client: &reqwest::Client, config: &LlmConfig, prompt: &str) -> Result<String> {
    let url = format!("{}/v1/chat/completions", config.base_url);
    let api_key = config.api_key.as_deref().unwrap_or_default();

    let req = ChatRequest {
        model: config.chat_model.clone(),
        messages: vec![Message {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        // Deterministic sampling keeps classification stable across calls
        temperature: 0.0,
    };

    let resp = client
        .post(&url)
        .header("Authorization", format!("Bearer {api_key}"))
        .json(&req)
        .send()
        .await
        .context("Failed to call chat API for emotion classification")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Chat API returned {status}: {body}");
    }

    let body: ChatResponse = resp.json().await?;
    Ok(body
        .choices
        .first()
        .map(|c| c.message.content.clone())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_exact_label() {
        assert_eq!(extract_label("슬픔"), "슬픔");
    }

    #[test]
    fn test_extract_label_embedded_in_commentary() {
        assert_eq!(extract_label("이 문장의 감정은 슬픔입니다."), "슬픔");
    }

    #[test]
    fn test_extract_first_label_in_table_order_on_tie() {
        // Reply mentions 슬픔 before 기쁨, but 기쁨 comes first in the table
        assert_eq!(extract_label("슬픔보다는 기쁨에 가깝습니다"), "기쁨");
        // 상처 precedes 분노 in the table
        assert_eq!(extract_label("분노와 상처가 섞여 있음"), "상처");
    }

    #[test]
    fn test_unrecognized_reply_returned_verbatim_trimmed() {
        assert_eq!(extract_label("  중립  "), "중립");
        assert_eq!(extract_label("I cannot classify this."), "I cannot classify this.");
    }

    #[test]
    fn test_empty_reply_returns_empty() {
        assert_eq!(extract_label(""), "");
        assert_eq!(extract_label("   "), "");
    }
}
