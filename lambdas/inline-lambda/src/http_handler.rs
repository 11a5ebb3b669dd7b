use std::sync::Arc;

use lambda_http::{http::Method, Body, Error, Request, Response};
use zipper_atoms::archive::InlineResolver;
use zipper_atoms::bundle::{preflight_response, zip_images_handler};
use zipper_atoms::request::{body_bytes, SourceMode};
use zipper_shared::AppState;

/// Lambda handler for `{"images": [...]}` requests.
/// How each string becomes bytes is fixed by `INLINE_ENCODING`.
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    let body = body_bytes(event.body());
    tracing::info!(
        "🚀 Inline zip lambda invoked - Method: {} Path: {} Body: {} bytes",
        method,
        path,
        body.len()
    );

    // Handle CORS preflight
    if *method == Method::OPTIONS {
        return preflight_response();
    }

    let resolver = InlineResolver::new(state.config.inline_encoding);
    let settings = state.config.bundle_settings(SourceMode::Inline);
    zip_images_handler(&settings, &resolver, &state.store, body).await
}
