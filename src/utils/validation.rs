use std::borrow::Cow;

use validator::ValidationError;

use crate::errors::AppError;

/// Payloads whose business rules run in a fixed order and stop at the first
/// violation.
pub trait OrderedValidate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub fn validate_payload<T: OrderedValidate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|err| {
        log::warn!("Rejected payload: {}", err.code);
        AppError::from(err)
    })
}

pub fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

pub fn require_non_blank(
    value: &str,
    code: &'static str,
    message: &'static str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule_error(code, message));
    }
    Ok(())
}
