use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::{
    db_adapters::user_adapter::UserAdapter,
    settings::types::Settings,
    use_cases::users::{
        register::register_user,
        signup_email::SignupEmailOptions,
        types::{RegistrationRequest, RegistrationResponse},
    },
    utils::emails::Mailer,
    web_adapters::utils::response_from_use_case_error,
};

#[tracing::instrument(
    name = "Adding a new user",
    skip(db, mailer, settings, new_user),
    fields(new_user_username = %new_user.username, new_user_email = %new_user.email)
)]
#[post("")]
pub async fn register(
    db: Data<DbConn>,
    mailer: Data<Mailer>,
    settings: Data<Settings>,
    new_user: Json<RegistrationRequest>,
) -> HttpResponse {
    match register_user(
        new_user.into_inner(),
        SignupEmailOptions::from_settings(&settings),
        UserAdapter::init(&db),
        &mailer,
        &settings,
    )
    .await
    {
        Ok(user) => HttpResponse::Created().json(RegistrationResponse {
            message: "Your account was created successfully. Check your email address to activate your account as we just sent you an activation link.".to_string(),
            user,
        }),
        Err(e) => response_from_use_case_error(e),
    }
}
