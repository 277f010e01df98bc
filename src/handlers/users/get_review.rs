use crate::{
    assignment::{self, PullRequestShort},
    error::Result,
    extractors::{Json, ValidatedQuery},
    StateTrait,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Query {
    #[validate(length(min = 1, max = 255))]
    user_id: String,
}

#[derive(Serialize)]
pub struct Response {
    user_id: String,
    pull_requests: Vec<PullRequestShort>,
}

pub async fn get_review<S: StateTrait>(
    State(state): State<S>,
    ValidatedQuery(query): ValidatedQuery<Query>,
) -> Result<Json<Response>> {
    let pull_requests = assignment::user_reviews(state.db(), &query.user_id).await?;

    Ok(Json(Response {
        user_id: query.user_id,
        pull_requests,
    }))
}
