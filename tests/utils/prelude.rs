#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{
    request::*,
    response::*,
    setup::{connect, reviewers},
    App,
};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use http::StatusCode;
pub use pr_reviewer::error;
pub use serde_json::{json, Value};
