use crate::{
    assignment::{self, Team},
    error::Result,
    extractors::{Json, ValidatedQuery},
    StateTrait,
};
use axum::extract::State;
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Query {
    #[validate(length(min = 1, max = 255))]
    team_name: String,
}

pub async fn get_team<S: StateTrait>(
    State(state): State<S>,
    ValidatedQuery(query): ValidatedQuery<Query>,
) -> Result<Json<Team>> {
    Ok(Json(
        assignment::get_team(state.db(), &query.team_name).await?,
    ))
}
