mod add;
mod deactivate;
mod get;

use crate::state::StateTrait;
use axum::{
    routing::{get, post},
    Router,
};

/// Routes for team management
///
/// POST /team/add
/// GET  /team/get?team_name=
/// POST /team/deactivate
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/add", post(add::add_team::<S>))
        .route("/get", get(get::get_team::<S>))
        .route("/deactivate", post(deactivate::deactivate_team::<S>))
}
