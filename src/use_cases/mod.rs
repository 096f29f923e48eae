use std::fmt::Debug;

pub mod users;

use users::registration_form::FormErrors;

#[derive(Debug)]
pub enum UseCaseError {
    BadRequest(String),          // 400
    InvalidForm(FormErrors),     // 400
    NotFound(String),            // 404
    Gone(String),                // 410
    InternalServerError(String), // 500
}

pub(crate) fn error_500(e: impl Debug) -> UseCaseError {
    UseCaseError::InternalServerError(format!("{:?}", e))
}
