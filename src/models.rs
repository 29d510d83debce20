use serde::{Deserialize, Serialize};

/// One retrieved meme image candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemeResult {
    /// The image link, doubling as the deduplication identity.
    pub id: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Display title derived from the search query, not the engine's title.
    pub title: String,
}

/// Query parameters for GET /api/memes.
#[derive(Debug, Clone, Deserialize)]
pub struct MemesQuery {
    pub emotion_text: String,
}

/// Success body for GET /api/memes.
#[derive(Debug, Clone, Serialize)]
pub struct MemesResponse {
    pub memes: Vec<MemeResult>,
}

/// Error body: `{"detail": "..."}`, the shape the front-end expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meme_result_serializes_image_url_as_camel_case() {
        let meme = MemeResult {
            id: "https://example.com/a.jpg".to_string(),
            image_url: "https://example.com/a.jpg".to_string(),
            title: "무한도전 슬픈 짤".to_string(),
        };
        let json = serde_json::to_value(&meme).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/a.jpg");
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn test_error_response_has_detail_field() {
        let err = ErrorResponse {
            detail: "Image search API returned 403 Forbidden".to_string(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["detail"], "Image search API returned 403 Forbidden");
    }
}
