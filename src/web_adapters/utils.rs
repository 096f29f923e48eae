use std::fmt::Debug;

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use tracing::{event, Level};

use crate::use_cases::{users::registration_form::FormErrors, UseCaseError};

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize)]
pub struct FormErrorResponse {
    pub errors: FormErrors,
}

#[derive(Serialize, Deserialize)]
pub struct SuccessResponse {
    pub message: String,
}

///Bad Request
pub fn response_400(error_message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Bad Request: per-field form errors
pub fn response_400_form(errors: FormErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(FormErrorResponse { errors })
}

/// NotFound
pub fn response_404(error_message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Gone
pub fn response_410(error_message: &str) -> HttpResponse {
    HttpResponse::Gone().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Internal Server Error: with logging
pub fn response_500<T: Debug>(e: T) -> HttpResponse {
    event!(target: "backend", Level::ERROR, "{:?}", e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Some unexpected error happened. Please try again later.".to_string(),
    })
}

pub fn response_from_use_case_error(e: UseCaseError) -> HttpResponse {
    match e {
        UseCaseError::BadRequest(message) => response_400(&message),
        UseCaseError::InvalidForm(errors) => response_400_form(errors),
        UseCaseError::NotFound(message) => response_404(&message),
        UseCaseError::Gone(message) => response_410(&message),
        UseCaseError::InternalServerError(message) => response_500(message),
    }
}
