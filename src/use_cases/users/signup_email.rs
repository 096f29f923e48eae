use chrono::Duration;
use minijinja::context;

use crate::{
    entities::user,
    settings::types::Settings,
    use_cases::{error_500, UseCaseError},
    utils::{
        auth::tokens::issue_confirmation_token,
        base36::int_to_base36,
        emails::{Mailer, OutgoingEmail},
    },
    ENV,
};

use super::types::UserVisible;

pub const DEFAULT_EMAIL_TEMPLATE: &str = "registration/signup_email.html";
pub const CONFIRM_PATH: &str = "/api/users/register/confirm";

/// Knobs for the confirmation email sent after signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupEmailOptions {
    /// Used as both site name and domain instead of the configured site.
    pub domain_override: Option<String>,
    pub email_template_name: String,
    pub use_https: bool,
}

impl SignupEmailOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            domain_override: None,
            email_template_name: DEFAULT_EMAIL_TEMPLATE.to_string(),
            use_https: settings.application.protocol == "https",
        }
    }
}

pub fn build_signup_email(
    user: &user::Model,
    options: &SignupEmailOptions,
    settings: &Settings,
) -> Result<OutgoingEmail, UseCaseError> {
    let (site_name, domain) = match &options.domain_override {
        Some(domain) => (domain.clone(), domain.clone()),
        None => (settings.site.name.clone(), settings.site.domain.clone()),
    };
    let protocol = match options.use_https {
        true => "https",
        false => "http",
    };
    let uid = int_to_base36(user.id.as_u128());
    let token = issue_confirmation_token(user.id, settings).map_err(error_500)?;
    let activation_link = format!("{protocol}://{domain}{CONFIRM_PATH}/{uid}/{token}");
    let expires_at = chrono::Local::now() + Duration::minutes(settings.secret.token_expiration);

    let template = ENV
        .get_template(&options.email_template_name)
        .map_err(error_500)?;
    let html_body = template
        .render(context! {
            email => &user.email,
            domain => &domain,
            site_name => &site_name,
            uid => &uid,
            user => UserVisible::from(user),
            token => &token,
            protocol => protocol,
            activation_link => &activation_link,
            expiration_time => settings.secret.token_expiration,
            exact_time => expires_at.format("%A %B %d, %Y at %r").to_string(),
        })
        .map_err(error_500)?;

    let text_body = format!(
        "Thanks for signing up at {site_name}.\n\
         Open the link below to activate your account:\n\
         {activation_link}\n\
         The link expires in {} minutes.\n",
        settings.secret.token_expiration
    );

    Ok(OutgoingEmail {
        to: user.email.clone(),
        subject: format!("Confirmation link sent on {}", site_name),
        html_body,
        text_body,
    })
}

#[tracing::instrument(
    name = "Sending signup confirmation email",
    skip(user, options, mailer, settings),
    fields(recipient_user_id = %user.id, recipient_email = %user.email)
)]
pub fn send_signup_email(
    user: &user::Model,
    options: &SignupEmailOptions,
    mailer: &Mailer,
    settings: &Settings,
) -> Result<(), UseCaseError> {
    let email = build_signup_email(user, options, settings)?;
    mailer.deliver(email).map_err(error_500)
}
