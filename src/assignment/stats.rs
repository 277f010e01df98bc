use super::models::{PullRequestReviewerCount, Stats, Status, UserAssignments};
use crate::error::Result;
use entity::{pull_requests, reviewer_assignments, teams, users};
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

#[derive(Debug, FromQueryResult)]
struct UserAssignmentsRow {
    user_id: String,
    username: String,
    total_assignments: i64,
}

#[derive(Debug, FromQueryResult)]
struct ReviewerCountRow {
    pull_request_id: String,
    pull_request_name: String,
    reviewer_count: i64,
}

pub async fn get_stats(db: &impl ConnectionTrait) -> Result<Stats> {
    let total_teams = teams::Entity::find().count(db).await?;
    let total_users = users::Entity::find().count(db).await?;
    let total_prs = pull_requests::Entity::find().count(db).await?;
    let open_prs = pull_requests::Entity::find()
        .filter(pull_requests::Column::Status.eq(Status::Open))
        .count(db)
        .await?;
    let merged_prs = pull_requests::Entity::find()
        .filter(pull_requests::Column::Status.eq(Status::Merged))
        .count(db)
        .await?;

    let assignments_by_user = users::Entity::find()
        .select_only()
        .column_as(users::Column::Id, "user_id")
        .column_as(users::Column::Name, "username")
        .column_as(
            Expr::col((
                reviewer_assignments::Entity,
                reviewer_assignments::Column::PrId,
            ))
            .count(),
            "total_assignments",
        )
        .left_join(reviewer_assignments::Entity)
        .group_by(users::Column::Id)
        .group_by(users::Column::Name)
        .order_by_desc(
            Expr::col((
                reviewer_assignments::Entity,
                reviewer_assignments::Column::PrId,
            ))
            .count(),
        )
        .order_by_asc(users::Column::Id)
        .into_model::<UserAssignmentsRow>()
        .all(db)
        .await?;

    let reviewers_by_pr = pull_requests::Entity::find()
        .select_only()
        .column_as(pull_requests::Column::Id, "pull_request_id")
        .column_as(pull_requests::Column::Name, "pull_request_name")
        .column_as(
            Expr::col((
                reviewer_assignments::Entity,
                reviewer_assignments::Column::UserId,
            ))
            .count(),
            "reviewer_count",
        )
        .left_join(reviewer_assignments::Entity)
        .group_by(pull_requests::Column::Id)
        .group_by(pull_requests::Column::Name)
        .order_by_desc(
            Expr::col((
                reviewer_assignments::Entity,
                reviewer_assignments::Column::UserId,
            ))
            .count(),
        )
        .order_by_asc(pull_requests::Column::Id)
        .into_model::<ReviewerCountRow>()
        .all(db)
        .await?;

    Ok(Stats {
        total_teams,
        total_users,
        total_prs,
        open_prs,
        merged_prs,
        assignments_by_user: assignments_by_user
            .into_iter()
            .map(|row| UserAssignments {
                user_id: row.user_id,
                username: row.username,
                total_assignments: row.total_assignments,
            })
            .collect(),
        reviewers_by_pr: reviewers_by_pr
            .into_iter()
            .map(|row| PullRequestReviewerCount {
                pull_request_id: row.pull_request_id,
                pull_request_name: row.pull_request_name,
                reviewer_count: row.reviewer_count,
            })
            .collect(),
    })
}
