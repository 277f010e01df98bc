use crate::{
    assignment::{self, Reassigned},
    error::Result,
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::extract::State;
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 255))]
    pull_request_id: String,
    #[validate(length(min = 1, max = 255))]
    old_user_id: String,
}

pub async fn reassign_reviewer<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Reassigned>> {
    let mut rng = state.rng();
    let reassigned = assignment::reassign_reviewer(
        state.db(),
        &mut rng,
        &request.pull_request_id,
        &request.old_user_id,
    )
    .await?;

    Ok(Json(reassigned))
}
