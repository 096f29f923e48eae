use actix_web::{http, test};
use registration_backend::use_cases::users::types::{RegistrationRequest, ResendEmailRequest};
use sea_orm::DbErr;

use crate::utils::{init_app, Connections};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, mailer, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(RegistrationRequest {
            username: "resend_me".to_string(),
            password: "password".to_string(),
            email: "resend@example.com".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/users/register/resend-email")
        .set_json(ResendEmailRequest {
            email: "RESEND@example.com".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let outbox = mailer.outbox();
    assert_eq!(outbox.len(), 2);
    assert!(outbox.iter().all(|email| email.to == "resend@example.com"));

    Ok(())
}

#[actix_web::test]
async fn not_found() -> Result<(), DbErr> {
    let Connections { app, mailer, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register/resend-email")
        .set_json(ResendEmailRequest {
            email: "nobody@example.com".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);
    assert!(mailer.outbox().is_empty());

    Ok(())
}
