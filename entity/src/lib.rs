pub mod pull_requests;
pub mod reviewer_assignments;
pub mod teams;
pub mod users;
