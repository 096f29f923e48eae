use std::{borrow::Cow, collections::BTreeMap};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    db_adapters::user_adapter::{UserAdapter, UserQuery},
    use_cases::{error_500, UseCaseError},
};

use super::types::RegistrationRequest;

const REQUIRED_CODE: &str = "required";
const REQUIRED_MESSAGE: &str = "This field is required.";
const INVALID_USERNAME_MESSAGE: &str =
    "This value may contain only letters, numbers and /./+/-/_ characters.";
const DUPLICATE_USERNAME_MESSAGE: &str = "A user with that username already exists.";
const DUPLICATE_EMAIL_MESSAGE: &str = "A user with that email already exists.";

/// Field name to error messages, in the shape the frontend renders next to inputs.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.0.get(field)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut form_errors = FormErrors::default();
        for (field, field_errors) in errors.field_errors() {
            // A missing value only reports that it is required.
            let required = field_errors.iter().find(|e| e.code == REQUIRED_CODE);
            let reported: Vec<&ValidationError> = match required {
                Some(required) => vec![required],
                None => field_errors.iter().collect(),
            };
            for error in reported {
                let message = error
                    .message
                    .clone()
                    .unwrap_or_else(|| error.code.clone());
                form_errors.add(&field.to_string(), &message);
            }
        }
        form_errors
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedRegistration {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Validate)]
pub struct RegistrationForm {
    #[validate(
        custom(function = "validate_username"),
        length(max = 30, message = "Ensure this value has at most 30 characters.")
    )]
    username: String,
    #[validate(custom(function = "validate_required"))]
    password: String,
    #[validate(
        custom(function = "validate_required"),
        email(message = "Enter a valid email address."),
        length(max = 75, message = "Ensure this value has at most 75 characters.")
    )]
    email: String,
}

impl RegistrationForm {
    /// Username and email are stripped of surrounding whitespace; the
    /// password is kept as typed.
    pub fn new(request: RegistrationRequest) -> Self {
        Self {
            username: request.username.trim().to_string(),
            password: request.password,
            email: request.email.trim().to_string(),
        }
    }

    /// Field-level validation only.
    pub fn clean(self) -> Result<CleanedRegistration, FormErrors> {
        self.validate().map_err(FormErrors::from)?;
        Ok(CleanedRegistration {
            username: self.username,
            password: self.password,
            email: self.email,
        })
    }

    /// Runs field validation plus the uniqueness checks against existing
    /// accounts, reporting every failing field at once.
    pub async fn is_valid(
        self,
        user_adapter: UserAdapter<'_>,
    ) -> Result<CleanedRegistration, UseCaseError> {
        let mut errors = match self.validate() {
            Ok(()) => FormErrors::default(),
            Err(e) => FormErrors::from(e),
        };

        if !errors.has_field("username") {
            if let Some(message) = clean_username(&self.username, user_adapter.clone()).await? {
                errors.add("username", message);
            }
        }
        if !errors.has_field("email") {
            if let Some(message) = clean_email(&self.email, user_adapter).await? {
                errors.add("email", message);
            }
        }

        if !errors.is_empty() {
            return Err(UseCaseError::InvalidForm(errors));
        }
        Ok(CleanedRegistration {
            username: self.username,
            password: self.password,
            email: self.email,
        })
    }
}

/// Returns the error message when the username is already taken.
pub async fn clean_username(
    username: &str,
    user_adapter: UserAdapter<'_>,
) -> Result<Option<&'static str>, UseCaseError> {
    user_adapter
        .get_by_username(username)
        .await
        .map(|user| user.map(|_| DUPLICATE_USERNAME_MESSAGE))
        .map_err(error_500)
}

/// Returns the error message when any account, active or not, already uses
/// this email address, ignoring case.
pub async fn clean_email(
    email: &str,
    user_adapter: UserAdapter<'_>,
) -> Result<Option<&'static str>, UseCaseError> {
    user_adapter
        .get_by_email_iexact(email)
        .await
        .map(|user| user.map(|_| DUPLICATE_EMAIL_MESSAGE))
        .map_err(error_500)
}

pub fn duplicate_username_errors() -> FormErrors {
    FormErrors::single("username", DUPLICATE_USERNAME_MESSAGE)
}

fn required_error() -> ValidationError {
    let mut error = ValidationError::new(REQUIRED_CODE);
    error.message = Some(Cow::Borrowed(REQUIRED_MESSAGE));
    error
}

fn validate_required(value: &str) -> Result<(), ValidationError> {
    match value.is_empty() {
        true => Err(required_error()),
        false => Ok(()),
    }
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    validate_required(username)?;
    let is_allowed = |c: char| c.is_alphanumeric() || matches!(c, '_' | '.' | '+' | '-');
    match username.chars().all(is_allowed) {
        true => Ok(()),
        false => {
            let mut error = ValidationError::new("invalid");
            error.message = Some(Cow::Borrowed(INVALID_USERNAME_MESSAGE));
            Err(error)
        }
    }
}
