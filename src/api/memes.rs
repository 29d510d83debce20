use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::models::{ErrorResponse, MemesQuery, MemesResponse};
use crate::pipeline;
use crate::state::AppState;

/// GET /api/memes?emotion_text=... — classify the text and return matching
/// meme images. Any upstream failure becomes a 500 with a `detail` body.
/// An empty `emotion_text` is accepted and passed through as-is.
pub async fn get_memes(
    State(state): State<AppState>,
    Query(query): Query<MemesQuery>,
) -> Result<Json<MemesResponse>, (StatusCode, Json<ErrorResponse>)> {
    let memes = pipeline::run(&state, &query.emotion_text)
        .await
        .map_err(|e| {
            tracing::error!("Pipeline failed: {e:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("{e:#}"),
                }),
            )
        })?;

    Ok(Json(MemesResponse { memes }))
}
