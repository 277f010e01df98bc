use crate::{
    assignment::{self, User},
    error::Result,
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 255))]
    user_id: String,
    is_active: bool,
}

#[derive(Serialize)]
pub struct Response {
    user: User,
}

pub async fn set_is_active<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let user =
        assignment::set_user_active(state.db(), &request.user_id, request.is_active).await?;

    Ok(Json(Response { user }))
}
