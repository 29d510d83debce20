//! Two-stage request pipeline: classify the emotion, then retrieve memes.

use anyhow::Result;

use crate::llm::classify;
use crate::models::MemeResult;
use crate::search::images;
use crate::state::AppState;

/// Run the full pipeline for one request.
///
/// Linear flow with no partial output: an error in either stage aborts the
/// run and surfaces to the HTTP handler. Each request gets its own run over
/// the shared read-only config and client.
pub async fn run(state: &AppState, emotion_text: &str) -> Result<Vec<MemeResult>> {
    let label = classify::classify(&state.http_client, &state.config.llm, emotion_text).await?;
    tracing::info!("Classified emotion: {label}");

    let memes = images::retrieve(&state.http_client, &state.config.search, &label).await?;
    tracing::info!("Retrieved {} memes for '{label}'", memes.len());

    Ok(memes)
}
