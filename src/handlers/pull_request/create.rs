use crate::{
    assignment::{self, NewPullRequest, PullRequest},
    error::Result,
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 255))]
    pull_request_id: String,
    #[validate(length(min = 1, max = 255))]
    pull_request_name: String,
    #[validate(length(min = 1, max = 255))]
    author_id: String,
}

#[derive(Serialize)]
pub struct Response {
    pr: PullRequest,
}

pub async fn create_pull_request<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let mut rng = state.rng();
    let pr = assignment::create_pull_request(
        state.db(),
        &mut rng,
        NewPullRequest {
            id: request.pull_request_id,
            name: request.pull_request_name,
            author_id: request.author_id,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(Response { pr })))
}
