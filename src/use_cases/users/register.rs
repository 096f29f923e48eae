use sea_orm::{DbErr, SqlErr};

use crate::{
    db_adapters::user_adapter::{CreateUserParams, UserAdapter, UserMutation},
    settings::types::Settings,
    use_cases::{error_500, UseCaseError},
    utils::{auth::password, emails::Mailer},
};

use super::{
    registration_form::{duplicate_username_errors, RegistrationForm},
    signup_email::{send_signup_email, SignupEmailOptions},
    types::{RegistrationRequest, UserVisible},
};

/// Creates an inactive account and mails its activation link.
#[tracing::instrument(
    name = "Registering a new user",
    skip(request, options, user_adapter, mailer, settings),
    fields(new_user_username = %request.username, new_user_email = %request.email)
)]
pub async fn register_user(
    request: RegistrationRequest,
    options: SignupEmailOptions,
    user_adapter: UserAdapter<'_>,
    mailer: &Mailer,
    settings: &Settings,
) -> Result<UserVisible, UseCaseError> {
    let cleaned = RegistrationForm::new(request)
        .is_valid(user_adapter.clone())
        .await?;

    let hashed_password = password::hash(cleaned.password.as_bytes()).map_err(error_500)?;

    let user = user_adapter
        .create(CreateUserParams {
            username: cleaned.username,
            email: cleaned.email,
            password: hashed_password,
            is_active: false,
        })
        .await
        .map_err(map_create_error)?;

    send_signup_email(&user, &options, mailer, settings)?;

    tracing::event!(target: "backend", tracing::Level::INFO, "User created successfully.");
    Ok(UserVisible::from(user))
}

/// A unique violation here means a concurrent signup took the username
/// after the form was validated.
fn map_create_error(e: DbErr) -> UseCaseError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            UseCaseError::InvalidForm(duplicate_username_errors())
        }
        _ => error_500(e),
    }
}
