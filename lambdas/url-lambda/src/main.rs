use std::sync::Arc;

use lambda_http::{run, service_fn, Error, Request};
use zipper_shared::{AppState, HttpImageResolver};

mod http_handler;

use http_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_http::tracing::init_default_subscriber();

    let state = Arc::new(AppState::from_env().await?);
    let fetcher = Arc::new(HttpImageResolver::default());

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        let fetcher = Arc::clone(&fetcher);
        async move { function_handler(event, state, &fetcher).await }
    }))
    .await
}
