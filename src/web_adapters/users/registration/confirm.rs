use actix_web::{
    get,
    http::header,
    web::{Data, Path},
    HttpResponse,
};
use sea_orm::DbConn;

use crate::{
    db_adapters::user_adapter::UserAdapter,
    settings::types::Settings,
    use_cases::{users::confirm::confirm_registration, UseCaseError},
    web_adapters::utils::{ErrorResponse, SuccessResponse},
};

#[derive(serde::Deserialize, Debug)]
pub struct PathParam {
    uid: String,
    token: String,
}

#[tracing::instrument(name = "Confirming a registration", skip(db, settings, path_param), fields(uid = %path_param.uid))]
#[get("/confirm/{uid}/{token}")]
pub async fn confirm(
    db: Data<DbConn>,
    settings: Data<Settings>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match confirm_registration(
        &path_param.uid,
        &path_param.token,
        UserAdapter::init(&db),
        &settings,
    )
    .await
    {
        Ok(_) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "New user was activated successfully.");
            HttpResponse::SeeOther()
                .insert_header((
                    header::LOCATION,
                    format!("{}/auth/confirmed", settings.application.frontend_url),
                ))
                .json(SuccessResponse {
                    message: "Your account has been activated successfully! You can now log in."
                        .to_string(),
                })
        }
        Err(UseCaseError::BadRequest(message)) | Err(UseCaseError::Gone(message)) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "Rejected activation link: {}", message);
            HttpResponse::SeeOther()
                .insert_header((
                    header::LOCATION,
                    format!("{}/auth/regenerate-token", settings.application.frontend_url),
                ))
                .json(ErrorResponse { error: message })
        }
        Err(e) => {
            tracing::event!(target: "backend", tracing::Level::ERROR, "Cannot activate account: {:?}", e);
            HttpResponse::SeeOther()
                .insert_header((
                    header::LOCATION,
                    format!("{}/auth/error", settings.application.frontend_url),
                ))
                .json(ErrorResponse {
                    error: "We cannot activate your account at the moment".to_string(),
                })
        }
    }
}
