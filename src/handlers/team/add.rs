use crate::{
    assignment::{self, Team, TeamMember},
    error::Result,
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 255))]
    team_name: String,
    #[validate(custom(function = "validate_members"))]
    members: Vec<TeamMember>,
}

#[derive(Serialize)]
pub struct Response {
    team: Team,
}

fn validate_members(members: &[TeamMember]) -> std::result::Result<(), ValidationError> {
    let valid = |s: &str| !s.is_empty() && s.len() <= 255;

    if members
        .iter()
        .all(|member| valid(&member.user_id) && valid(&member.username))
    {
        Ok(())
    } else {
        Err(ValidationError::new("member"))
    }
}

pub async fn add_team<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let team = assignment::create_team(state.db(), &request.team_name, request.members).await?;

    Ok((StatusCode::CREATED, Json(Response { team })))
}
