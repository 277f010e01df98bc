use crate::{
    assignment::{self, DeactivationReport},
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
    team_name: String,
}

pub async fn deactivate_team<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<DeactivationReport>> {
    let mut rng = state.rng();
    let report = assignment::deactivate_team(state.db(), &mut rng, &request.team_name).await?;

    Ok(Json(report))
}
