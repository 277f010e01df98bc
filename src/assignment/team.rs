use super::{
    models::{PullRequestShort, Team, TeamMember, User},
    txn,
};
use crate::error::{self, Result};
use entity::{pull_requests, teams, users};
use sea_orm::{
    sea_query::OnConflict, ConnectionTrait, EntityTrait, IntoActiveModel, QueryOrder, Set,
    TransactionTrait,
};

/// Creates a team and upserts its members. A member that already exists is
/// moved into the new team with the given name and activity flag.
pub async fn create_team<C>(db: &C, team_name: &str, members: Vec<TeamMember>) -> Result<Team>
where
    C: TransactionTrait,
{
    let txn = db.begin().await?;

    if teams::Entity::find_by_id(team_name).one(&txn).await?.is_some() {
        return Err(error::TEAM_EXISTS);
    }

    txn::insert_team(&txn, team_name).await?;

    for member in members {
        let model = users::ActiveModel {
            id: Set(member.user_id),
            name: Set(member.username),
            team: Set(team_name.to_owned()),
            active: Set(member.is_active),
        };

        users::Entity::insert(model)
            .on_conflict(
                OnConflict::column(users::Column::Id)
                    .update_columns([
                        users::Column::Name,
                        users::Column::Team,
                        users::Column::Active,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
    }

    let team = load_team(&txn, team_name).await?;

    txn.commit().await?;

    info!(
        "team {team_name} created with {} members",
        team.members.len()
    );

    Ok(team)
}

pub async fn get_team(db: &impl ConnectionTrait, team_name: &str) -> Result<Team> {
    teams::Entity::find_by_id(team_name)
        .one(db)
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    load_team(db, team_name).await
}

async fn load_team(db: &impl ConnectionTrait, team_name: &str) -> Result<Team> {
    let members = users::Entity::find_in_team(team_name)
        .order_by_asc(users::Column::Id)
        .all(db)
        .await?;

    Ok(Team {
        team_name: team_name.to_owned(),
        members: members.into_iter().map(TeamMember::from).collect(),
    })
}

/// Flips the activity flag of a single user. Existing reviewer assignments are
/// left alone.
pub async fn set_user_active(db: &impl ConnectionTrait, user_id: &str, active: bool) -> Result<User> {
    let user = users::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or(error::USER_NOT_FOUND)?;

    if user.active == active {
        return Ok(user.into());
    }

    let mut model = user.into_active_model();
    model.active = Set(active);

    let user = users::Entity::update(model).exec(db).await?;

    info!("user {user_id} active={active}");

    Ok(user.into())
}

/// Pull requests the user reviews, newest first. Unknown users simply have none.
pub async fn user_reviews(db: &impl ConnectionTrait, user_id: &str) -> Result<Vec<PullRequestShort>> {
    let prs = pull_requests::Entity::find_reviewed_by(user_id)
        .order_by_desc(pull_requests::Column::CreatedAt)
        .order_by_asc(pull_requests::Column::Id)
        .all(db)
        .await?;

    Ok(prs.into_iter().map(PullRequestShort::from).collect())
}
