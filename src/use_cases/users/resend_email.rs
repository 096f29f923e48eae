use crate::{
    db_adapters::user_adapter::{UserAdapter, UserFilter, UserQuery},
    settings::types::Settings,
    use_cases::{error_500, UseCaseError},
    utils::emails::Mailer,
};

use super::{
    signup_email::{send_signup_email, SignupEmailOptions},
    types::ResendEmailRequest,
};

#[tracing::instrument(
    name = "Resending registration confirmation email",
    skip(options, user_adapter, mailer, settings)
)]
pub async fn resend_confirmation_email(
    request: ResendEmailRequest,
    options: SignupEmailOptions,
    user_adapter: UserAdapter<'_>,
    mailer: &Mailer,
    settings: &Settings,
) -> Result<(), UseCaseError> {
    match user_adapter
        .filter_eq_is_active(false)
        .get_by_email_iexact(request.email.trim())
        .await
        .map_err(error_500)?
    {
        Some(user) => send_signup_email(&user, &options, mailer, settings),
        None => Err(UseCaseError::NotFound(
            "User with this email was not found. This happens if you have already activated this user."
                .to_string(),
        )),
    }
}
