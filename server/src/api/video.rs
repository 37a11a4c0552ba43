use axum::{
    http::{header, HeaderValue},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeFile, set_header::SetResponseHeaderLayer};

use super::AppState;

/// Routes for `/video/stream`.
///
/// `ServeFile` handles range requests and answers 404 when the file is gone.
/// Every response is marked uncacheable so seeking clients never replay a stale copy.
pub fn routes(state: &AppState) -> Router<AppState> {
    let service = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .service(ServeFile::new(state.video_path.as_path()));

    Router::new().route_service("/video/stream", service)
}
