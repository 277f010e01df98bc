mod get_review;
mod set_is_active;

use crate::state::StateTrait;
use axum::{
    routing::{get, post},
    Router,
};

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/setIsActive", post(set_is_active::set_is_active::<S>))
        .route("/getReview", get(get_review::get_review::<S>))
}
