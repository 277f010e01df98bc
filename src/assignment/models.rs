use chrono::{DateTime, Utc};
use entity::{pull_requests, users};
use serde::{Deserialize, Serialize, Serializer};

pub use entity::pull_requests::Status;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

impl From<users::Model> for TeamMember {
    fn from(user: users::Model) -> Self {
        Self {
            user_id: user.id,
            username: user.name,
            is_active: user.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub team_name: String,
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}

impl From<users::Model> for User {
    fn from(user: users::Model) -> Self {
        Self {
            user_id: user.id,
            username: user.name,
            team_name: user.team,
            is_active: user.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPullRequest {
    pub id: String,
    pub name: String,
    pub author_id: String,
}

/// A pull request together with its reviewer set, ordered by user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequest {
    #[serde(rename = "pull_request_id")]
    pub id: String,
    #[serde(rename = "pull_request_name")]
    pub name: String,
    pub author_id: String,
    pub status: Status,
    #[serde(rename = "assigned_reviewers")]
    pub reviewers: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "mergedAt", skip_serializing_if = "Option::is_none")]
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    pub(crate) fn from_model(model: pull_requests::Model, reviewers: Vec<String>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            author_id: model.author,
            status: model.status,
            reviewers,
            created_at: model.created_at,
            merged_at: model.merged_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestShort {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: Status,
}

impl From<pull_requests::Model> for PullRequestShort {
    fn from(model: pull_requests::Model) -> Self {
        Self {
            pull_request_id: model.id,
            pull_request_name: model.name,
            author_id: model.author,
            status: model.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reassigned {
    pub pr: PullRequest,
    pub replaced_by: String,
}

/// One reviewer slot repaired by a team deactivation. `new_user_id` is `None`
/// when no replacement was available and the slot was dropped; on the wire
/// that is an empty `new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reassignment {
    #[serde(rename = "pr_id")]
    pub pull_request_id: String,
    #[serde(rename = "old")]
    pub old_user_id: String,
    #[serde(rename = "new", serialize_with = "empty_if_none")]
    pub new_user_id: Option<String>,
}

fn empty_if_none<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeactivationReport {
    pub deactivated_users: Vec<String>,
    pub reassignments: Vec<Reassignment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAssignments {
    pub user_id: String,
    pub username: String,
    pub total_assignments: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestReviewerCount {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub reviewer_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_teams: u64,
    pub total_users: u64,
    pub total_prs: u64,
    pub open_prs: u64,
    pub merged_prs: u64,
    pub assignments_by_user: Vec<UserAssignments>,
    pub reviewers_by_pr: Vec<PullRequestReviewerCount>,
}
