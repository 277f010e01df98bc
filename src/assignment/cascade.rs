//! Team deactivation and the reviewer repair it triggers.
//!
//! Everything runs in one transaction: the members are switched off first,
//! then the open pull requests they review are collected together with the
//! candidate pools as they look after the switch, and finally every stale
//! reviewer slot is swapped or dropped.

use super::{
    models::{DeactivationReport, Reassignment, Status},
    selector, txn,
};
use crate::error::{self, Result};
use entity::{pull_requests, reviewer_assignments, teams, users};
use rand::Rng;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AffectedPullRequest {
    pub author: String,
    pub reviewers: BTreeSet<String>,
}

/// Deactivates every active member of `team_name` and repairs the reviewer
/// sets of the open pull requests they were reviewing.
pub async fn deactivate_team<C, R>(db: &C, rng: &mut R, team_name: &str) -> Result<DeactivationReport>
where
    C: TransactionTrait,
    R: Rng + Send + ?Sized,
{
    let txn = db.begin().await?;
    let report = deactivate_team_in(&txn, rng, team_name).await?;
    txn.commit().await?;

    info!(
        "team {team_name} deactivated, users: {}, reassignments: {}",
        report.deactivated_users.len(),
        report.reassignments.len(),
    );

    Ok(report)
}

/// The cascade itself, run on a transaction owned by the caller. Nothing is
/// visible to others until the caller commits.
pub async fn deactivate_team_in<R>(
    txn: &DatabaseTransaction,
    rng: &mut R,
    team_name: &str,
) -> Result<DeactivationReport>
where
    R: Rng + Send + ?Sized,
{
    teams::Entity::find_by_id(team_name)
        .one(txn)
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    let members = users::Entity::find_active_in_team(team_name)
        .order_by_asc(users::Column::Id)
        .lock_exclusive()
        .all(txn)
        .await?;

    if members.is_empty() {
        debug!("team {team_name} has no active members");
        return Ok(DeactivationReport::default());
    }

    let teams_of: BTreeMap<String, String> = members
        .into_iter()
        .map(|user| (user.id, user.team))
        .collect();
    let deactivated: Vec<String> = teams_of.keys().cloned().collect();

    users::Entity::update_many()
        .col_expr(users::Column::Active, Expr::value(false))
        .filter(users::Column::Id.is_in(deactivated.iter().cloned()))
        .exec(txn)
        .await?;

    let affected = affected_pull_requests(txn, &deactivated).await?;

    let reassignments = if affected.is_empty() {
        Vec::new()
    } else {
        let pools = active_users_by_team(txn).await?;
        let stale: BTreeSet<String> = deactivated.iter().cloned().collect();
        let plan = plan_reassignments(rng, affected, &stale, &teams_of, &pools);

        for swap in &plan {
            txn::swap_reviewer(
                txn,
                &swap.pull_request_id,
                &swap.old_user_id,
                swap.new_user_id.as_deref(),
            )
            .await?;
        }

        plan
    };

    Ok(DeactivationReport {
        deactivated_users: deactivated,
        reassignments,
    })
}

/// Open pull requests with at least one reviewer in `reviewers`, keyed by id,
/// each with its author and complete reviewer set.
async fn affected_pull_requests(
    db: &impl ConnectionTrait,
    reviewers: &[String],
) -> Result<BTreeMap<String, AffectedPullRequest>> {
    let pr_ids: BTreeSet<String> = reviewer_assignments::Entity::find()
        .filter(reviewer_assignments::Column::UserId.is_in(reviewers.iter().cloned()))
        .all(db)
        .await?
        .into_iter()
        .map(|row| row.pr_id)
        .collect();

    if pr_ids.is_empty() {
        return Ok(BTreeMap::new());
    }

    let mut affected: BTreeMap<String, AffectedPullRequest> = pull_requests::Entity::find()
        .filter(pull_requests::Column::Id.is_in(pr_ids))
        .filter(pull_requests::Column::Status.eq(Status::Open))
        .lock_exclusive()
        .all(db)
        .await?
        .into_iter()
        .map(|pr| {
            (
                pr.id,
                AffectedPullRequest {
                    author: pr.author,
                    reviewers: BTreeSet::new(),
                },
            )
        })
        .collect();

    if affected.is_empty() {
        return Ok(affected);
    }

    let assignments = reviewer_assignments::Entity::find()
        .filter(reviewer_assignments::Column::PrId.is_in(affected.keys().cloned()))
        .all(db)
        .await?;

    for row in assignments {
        if let Some(pr) = affected.get_mut(&row.pr_id) {
            pr.reviewers.insert(row.user_id);
        }
    }

    Ok(affected)
}

/// Active users grouped by team, taken after the deactivation step.
async fn active_users_by_team(
    db: &impl ConnectionTrait,
) -> Result<BTreeMap<String, BTreeSet<String>>> {
    let users = users::Entity::find()
        .filter(users::Column::Active.eq(true))
        .all(db)
        .await?;

    let mut pools: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for user in users {
        pools.entry(user.team).or_default().insert(user.id);
    }

    Ok(pools)
}

/// Decides a replacement for every stale reviewer slot.
///
/// Pull requests are visited in id order and their stale reviewers in id
/// order. The candidate pool is the post-deactivation active membership of the
/// stale reviewer's own team. The exclusion set is rebuilt from the pull
/// request's live reviewer set before every draw, so a pull request never gets
/// the same replacement twice. Pools are not consumed across pull requests:
/// one user may end up covering several of them.
pub(crate) fn plan_reassignments<R>(
    rng: &mut R,
    affected: BTreeMap<String, AffectedPullRequest>,
    stale: &BTreeSet<String>,
    teams_of: &BTreeMap<String, String>,
    pools: &BTreeMap<String, BTreeSet<String>>,
) -> Vec<Reassignment>
where
    R: Rng + ?Sized,
{
    let no_candidates = BTreeSet::new();
    let mut plan = Vec::new();

    for (pr_id, mut pr) in affected {
        let stale_here: Vec<String> = pr.reviewers.intersection(stale).cloned().collect();

        for old in stale_here {
            let pool = teams_of
                .get(&old)
                .and_then(|team| pools.get(team))
                .unwrap_or(&no_candidates);

            let mut exclude = pr.reviewers.clone();
            exclude.insert(pr.author.clone());

            let new = selector::pick_one(rng, pool, &exclude);

            pr.reviewers.remove(&old);
            if let Some(new) = &new {
                pr.reviewers.insert(new.clone());
            } else {
                debug!("dropping reviewer {old} from {pr_id}, no candidates left");
            }

            plan.push(Reassignment {
                pull_request_id: pr_id.clone(),
                old_user_id: old,
                new_user_id: new,
            });
        }
    }

    plan
}
