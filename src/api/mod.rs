pub mod memes;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::state::AppState;

/// Build the application router.
///
/// Development CORS posture: every origin, method, and header is permitted.
/// Mirror-request variants are used because wildcard values cannot be
/// combined with credentials.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/api/memes", get(memes::get_memes))
        .layer(cors)
        .with_state(state)
}
