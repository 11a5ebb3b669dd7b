use std::sync::Arc;

use lambda_http::{http::Method, Body, Error, Request, Response};
use zipper_atoms::bundle::{preflight_response, zip_images_handler};
use zipper_atoms::request::{body_bytes, SourceMode};
use zipper_shared::{AppState, HttpImageResolver};

/// Lambda handler for `{"imageUrls": [...]}` requests
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
    fetcher: &HttpImageResolver,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    let body = body_bytes(event.body());
    tracing::info!(
        "🚀 URL zip lambda invoked - Method: {} Path: {} Body: {} bytes",
        method,
        path,
        body.len()
    );

    // Handle CORS preflight
    if *method == Method::OPTIONS {
        return preflight_response();
    }

    let settings = state.config.bundle_settings(SourceMode::Url);
    zip_images_handler(&settings, fetcher, &state.store, body).await
}
