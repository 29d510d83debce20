use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// LLM provider configuration
    pub llm: LlmConfig,
    /// Image search API configuration
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL for the OpenAI-compatible chat API
    pub base_url: String,
    /// Model name for classification
    pub chat_model: String,
    /// API key. Absence is not checked at startup; calls fail upstream.
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Google Custom Search endpoint
    pub base_url: String,
    /// Search API key
    pub api_key: Option<String>,
    /// Custom search engine (cx) identifier
    pub cx_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
            llm: LlmConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            chat_model: "gpt-4o".to_string(),
            api_key: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.googleapis.com/customsearch/v1".to_string(),
            api_key: None,
            cx_id: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("MEME_SEARCH_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(url) = std::env::var("OPENAI_BASE_URL") {
            config.llm.base_url = url;
        }
        if let Ok(model) = std::env::var("LLM_CHAT_MODEL") {
            config.llm.chat_model = model;
        }
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            config.llm.api_key = Some(key);
        }
        if let Ok(url) = std::env::var("GOOGLE_SEARCH_URL") {
            config.search.base_url = url;
        }
        if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
            config.search.api_key = Some(key);
        }
        if let Ok(cx) = std::env::var("GOOGLE_CX_ID") {
            config.search.cx_id = Some(cx);
        }

        config
    }
}
