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
        resend_email::resend_confirmation_email, signup_email::SignupEmailOptions,
        types::ResendEmailRequest,
    },
    utils::emails::Mailer,
    web_adapters::utils::{response_from_use_case_error, SuccessResponse},
};

#[tracing::instrument(
    name = "Resending registration confirmation email",
    skip(db, mailer, settings, req)
)]
#[post("/resend-email")]
pub async fn resend_email(
    db: Data<DbConn>,
    mailer: Data<Mailer>,
    settings: Data<Settings>,
    req: Json<ResendEmailRequest>,
) -> HttpResponse {
    match resend_confirmation_email(
        req.into_inner(),
        SignupEmailOptions::from_settings(&settings),
        UserAdapter::init(&db),
        &mailer,
        &settings,
    )
    .await
    {
        Ok(_) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "Verification email re-sent successfully.");
            HttpResponse::Ok().json(SuccessResponse {
                message: "Account activation link has been sent to your email address. Kindly take action before its expiration".to_string(),
            })
        }
        Err(e) => response_from_use_case_error(e),
    }
}
