//! Reviewer assignment engine.
//!
//! Every operation that changes more than one row opens its own transaction on
//! the connection it is given and commits only after all of its writes went
//! through. Any error drops the transaction, which rolls it back.

mod cascade;
mod models;
mod pull_request;
mod selector;
mod stats;
mod team;
pub mod txn;

pub use cascade::{deactivate_team, deactivate_team_in};
pub use models::*;
pub use pull_request::{create_pull_request, merge_pull_request, reassign_reviewer, MAX_REVIEWERS};
pub use selector::{pick, pick_one};
pub use stats::get_stats;
pub use team::{create_team, get_team, set_user_active, user_reviews};
