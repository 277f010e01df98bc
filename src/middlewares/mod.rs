use crate::StateTrait;
use axum::{extract::Request, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    timeout::TimeoutLayer,
    trace::{DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::{Level, Span};

const REQUEST_ID_HEADER: &str = "x-request-id";

fn request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id,
    )
}

/// Wraps the routes with the shared middleware stack. Requests running past
/// `timeout` are answered with 408 and their handler future is dropped.
pub fn middlewares<S: StateTrait>(state: S, router: Router<S>, timeout: Duration) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(request_span)
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let middlewares = ServiceBuilder::new()
        .catch_panic()
        .set_x_request_id(MakeRequestUuid)
        .propagate_x_request_id()
        .layer(trace_layer)
        .compression()
        .decompression()
        .layer(cors_layer)
        .layer(TimeoutLayer::new(timeout))
        .into_inner();

    router.layer(middlewares).with_state(state)
}
