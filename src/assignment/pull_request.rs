use super::{
    models::{NewPullRequest, PullRequest, Reassigned, Status},
    selector, txn,
};
use crate::error::{self, Result};
use chrono::Utc;
use entity::pull_requests;
use rand::Rng;
use sea_orm::{EntityTrait, IntoActiveModel, Set, TransactionTrait};
use std::collections::BTreeSet;

/// Upper bound on reviewers assigned when a pull request is opened.
pub const MAX_REVIEWERS: usize = 2;

/// Opens a pull request and assigns up to [`MAX_REVIEWERS`] active teammates of
/// the author. A team without eligible members yields an empty reviewer set.
pub async fn create_pull_request<C, R>(
    db: &C,
    rng: &mut R,
    request: NewPullRequest,
) -> Result<PullRequest>
where
    C: TransactionTrait,
    R: Rng + Send + ?Sized,
{
    let txn = db.begin().await?;

    if pull_requests::Entity::find_by_id(request.id.as_str())
        .one(&txn)
        .await?
        .is_some()
    {
        return Err(error::PR_EXISTS);
    }

    let author = txn::find_user(&txn, &request.author_id)
        .await?
        .ok_or(error::AUTHOR_NOT_FOUND)?;

    let pool = txn::active_team_members(&txn, &author.team).await?;
    let exclude = BTreeSet::from([author.id.clone()]);
    let reviewers = selector::pick(rng, &pool, &exclude, MAX_REVIEWERS);

    debug!(
        "picked {:?} for {} from team {}",
        reviewers, request.id, author.team
    );

    let model = pull_requests::ActiveModel {
        id: Set(request.id.clone()),
        name: Set(request.name),
        author: Set(author.id),
        status: Set(Status::Open),
        created_at: Set(Utc::now()),
        merged_at: Set(None),
    };

    // the existence check above does not hold a lock, a concurrent insert
    // is caught by the primary key
    txn::insert_pull_request(&txn, model).await?;

    txn::insert_reviewers(&txn, &request.id, &reviewers).await?;

    let pr = txn::load_pull_request(&txn, &request.id)
        .await?
        .ok_or(error::PR_NOT_FOUND)?;

    txn.commit().await?;

    info!(
        "pull request {} created with reviewers {:?}",
        pr.id, pr.reviewers
    );

    Ok(pr)
}

/// Marks the pull request as merged. Merging an already merged pull request
/// returns it unchanged.
pub async fn merge_pull_request<C>(db: &C, pr_id: &str) -> Result<PullRequest>
where
    C: TransactionTrait,
{
    let txn = db.begin().await?;

    let pr = txn::lock_pull_request(&txn, pr_id)
        .await?
        .ok_or(error::PR_NOT_FOUND)?;

    if pr.status == Status::Open {
        let mut model = pr.into_active_model();
        model.status = Set(Status::Merged);
        model.merged_at = Set(Some(Utc::now()));

        pull_requests::Entity::update(model).exec(&txn).await?;

        info!("pull request {pr_id} merged");
    } else {
        debug!("pull request {pr_id} is already merged");
    }

    let pr = txn::load_pull_request(&txn, pr_id)
        .await?
        .ok_or(error::PR_NOT_FOUND)?;

    txn.commit().await?;

    Ok(pr)
}

/// Replaces `old_reviewer_id` with a random active member of that reviewer's
/// team who is neither the author nor already reviewing. The swap happens
/// only when a replacement exists.
pub async fn reassign_reviewer<C, R>(
    db: &C,
    rng: &mut R,
    pr_id: &str,
    old_reviewer_id: &str,
) -> Result<Reassigned>
where
    C: TransactionTrait,
    R: Rng + Send + ?Sized,
{
    let txn = db.begin().await?;

    let pr = txn::lock_pull_request(&txn, pr_id)
        .await?
        .ok_or(error::PR_NOT_FOUND)?;

    if pr.status == Status::Merged {
        return Err(error::PR_MERGED);
    }

    let reviewers = txn::reviewers_of(&txn, pr_id).await?;

    if !reviewers.contains(old_reviewer_id) {
        return Err(error::NOT_ASSIGNED);
    }

    let old_reviewer = txn::find_user(&txn, old_reviewer_id)
        .await?
        .ok_or(error::USER_NOT_FOUND)?;

    let pool = txn::active_team_members(&txn, &old_reviewer.team).await?;

    let mut exclude = reviewers;
    exclude.insert(pr.author);

    let Some(new_reviewer) = selector::pick_one(rng, &pool, &exclude) else {
        warn!(
            "no replacement for {old_reviewer_id} on {pr_id} in team {}",
            old_reviewer.team
        );
        return Err(error::NO_CANDIDATE);
    };

    txn::swap_reviewer(&txn, pr_id, old_reviewer_id, Some(&new_reviewer)).await?;

    let pr = txn::load_pull_request(&txn, pr_id)
        .await?
        .ok_or(error::PR_NOT_FOUND)?;

    txn.commit().await?;

    info!("reviewer reassigned on {pr_id}: {old_reviewer_id} -> {new_reviewer}");

    Ok(Reassigned {
        pr,
        replaced_by: new_reviewer,
    })
}
