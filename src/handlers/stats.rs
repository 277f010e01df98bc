use crate::{assignment, error::Result, extractors::Json, StateTrait};
use axum::extract::State;

pub async fn get_stats<S: StateTrait>(State(state): State<S>) -> Result<Json<assignment::Stats>> {
    Ok(Json(assignment::get_stats(state.db()).await?))
}
