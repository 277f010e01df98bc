mod json;
mod query;

pub use json::*;
pub use query::*;

use crate::{Error, Result};
use validator::Validate;

/// Runs the derived validation rules, mapping any failure to `rejection`.
fn validated<T: Validate>(value: T, rejection: Error<'static>) -> Result<T> {
    match value.validate() {
        Ok(()) => Ok(value),
        Err(errors) => {
            debug!("validation failed: {errors}");
            Err(rejection)
        }
    }
}
