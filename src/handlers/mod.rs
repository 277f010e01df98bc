mod pull_request;
mod stats;
mod team;
mod users;

use crate::{extractors::Json, state::StateTrait};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use sea_orm::ConnectionTrait;
use serde_json::{json, Value};

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .nest("/team", team::routes::<S>())
        .nest("/users", users::routes::<S>())
        .nest("/pullRequest", pull_request::routes::<S>())
        .route("/stats", get(stats::get_stats::<S>))
        .route("/health", get(health::<S>))
}

async fn health<S: StateTrait>(State(state): State<S>) -> (StatusCode, Json<Value>) {
    if let Err(err) = state.db().execute_unprepared("select 1").await {
        error!("health check failed: {err:?}");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable" })),
        );
    }

    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
