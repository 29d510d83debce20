//! # meme-search
//!
//! A web service that recommends 무한도전 meme images ("짤") for a feeling
//! described in free text.
//!
//! ## Architecture
//!
//! A linear two-stage pipeline runs per request:
//!
//! ```text
//!   emotion_text
//!        │
//!        ▼
//!   ┌──────────────────┐   one of 6 labels,   ┌──────────────────────┐
//!   │ LLM classification│──raw-reply fallback─►│ phrase-driven image  │
//!   │ (chat completion, │                      │ search (per-phrase   │
//!   │  temperature 0)   │                      │ queries, filtering,  │
//!   └──────────────────┘                      │ cross-phrase dedup)  │
//!                                              └──────────┬───────────┘
//!                                                         ▼
//!                                                  { "memes": [...] }
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for server, LLM, and search API
//! - [`models`] - Wire types: `MemeResult`, request/response bodies
//! - [`phrases`] - The fixed emotion-to-phrase table driving prompts and queries
//! - [`llm`] - Emotion classification via an OpenAI-compatible chat API
//! - [`search`] - Image search with filtering and deduplication
//! - [`pipeline`] - Sequences classify → retrieve for one request
//! - [`api`] - Axum router and the GET /api/memes handler
//! - [`state`] - Shared application state (config + HTTP client)

pub mod api;
pub mod config;
pub mod llm;
pub mod models;
pub mod phrases;
pub mod pipeline;
pub mod search;
pub mod state;
