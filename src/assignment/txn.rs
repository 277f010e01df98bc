//! Queries shared by the engines. Each helper takes the connection it runs
//! on explicitly; the engines pass their open transaction.
//!
//! Public together with [`super::deactivate_team_in`] so callers that own a
//! transaction can compose engine steps on it and inspect its state before
//! committing or rolling back.

use super::models::PullRequest;
use crate::error::{self, DatabaseError, Result};
use entity::{pull_requests, reviewer_assignments, teams, users};
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, QuerySelect, Set};
use std::collections::BTreeSet;

pub async fn find_user(db: &impl ConnectionTrait, user_id: &str) -> Result<Option<users::Model>> {
    Ok(users::Entity::find_by_id(user_id).one(db).await?)
}

/// Locks the pull request row for the rest of the transaction.
pub async fn lock_pull_request(
    db: &impl ConnectionTrait,
    pr_id: &str,
) -> Result<Option<pull_requests::Model>> {
    Ok(pull_requests::Entity::find_by_id(pr_id)
        .lock_exclusive()
        .one(db)
        .await?)
}

pub async fn active_team_members(db: &impl ConnectionTrait, team: &str) -> Result<BTreeSet<String>> {
    let members = users::Entity::find_active_in_team(team)
        .order_by_asc(users::Column::Id)
        .all(db)
        .await?;

    Ok(members.into_iter().map(|user| user.id).collect())
}

pub async fn reviewers_of(db: &impl ConnectionTrait, pr_id: &str) -> Result<BTreeSet<String>> {
    let rows = reviewer_assignments::Entity::find_for_pull_request(pr_id)
        .all(db)
        .await?;

    Ok(rows.into_iter().map(|row| row.user_id).collect())
}

pub async fn load_pull_request(
    db: &impl ConnectionTrait,
    pr_id: &str,
) -> Result<Option<PullRequest>> {
    let Some(model) = pull_requests::Entity::find_by_id(pr_id).one(db).await? else {
        return Ok(None);
    };

    let reviewers = reviewers_of(db, pr_id).await?;

    Ok(Some(PullRequest::from_model(
        model,
        reviewers.into_iter().collect(),
    )))
}

/// Inserts the team row. A duplicate name is `TEAM_EXISTS`, also when a
/// concurrent request committed it after the caller's existence check.
pub async fn insert_team(db: &impl ConnectionTrait, team_name: &str) -> Result {
    let team = teams::ActiveModel {
        name: Set(team_name.to_owned()),
    };

    match teams::Entity::insert(team).exec_without_returning(db).await {
        Ok(_) => Ok(()),
        Err(err) if err.unique_violation() => Err(error::TEAM_EXISTS),
        Err(err) => Err(err.into()),
    }
}

/// Inserts the pull request row. A duplicate id is `PR_EXISTS`, also when a
/// concurrent request committed it after the caller's existence check.
pub async fn insert_pull_request(
    db: &impl ConnectionTrait,
    model: pull_requests::ActiveModel,
) -> Result {
    match pull_requests::Entity::insert(model)
        .exec_without_returning(db)
        .await
    {
        Ok(_) => Ok(()),
        Err(err) if err.unique_violation() => Err(error::PR_EXISTS),
        Err(err) => Err(err.into()),
    }
}

pub async fn insert_reviewers(
    db: &impl ConnectionTrait,
    pr_id: &str,
    reviewers: &[String],
) -> Result {
    if reviewers.is_empty() {
        return Ok(());
    }

    let rows = reviewers
        .iter()
        .map(|user_id| reviewer_assignments::ActiveModel {
            pr_id: Set(pr_id.to_owned()),
            user_id: Set(user_id.clone()),
        });

    reviewer_assignments::Entity::insert_many(rows)
        .exec_without_returning(db)
        .await?;

    Ok(())
}

/// Removes `old` from the pull request and, if given, assigns `new` in its place.
pub async fn swap_reviewer(
    db: &impl ConnectionTrait,
    pr_id: &str,
    old: &str,
    new: Option<&str>,
) -> Result {
    reviewer_assignments::Entity::delete_by_id((pr_id.to_owned(), old.to_owned()))
        .exec(db)
        .await?;

    if let Some(new) = new {
        reviewer_assignments::Entity::insert(reviewer_assignments::ActiveModel {
            pr_id: Set(pr_id.to_owned()),
            user_id: Set(new.to_owned()),
        })
        .exec_without_returning(db)
        .await?;
    }

    Ok(())
}
