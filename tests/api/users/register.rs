use actix_web::{http, test};
use registration_backend::{
    entities::user,
    use_cases::users::types::{RegistrationRequest, RegistrationResponse},
};
use sea_orm::{DbErr, EntityTrait};

use crate::utils::{init_app, Connections};

fn request(username: &str, password: &str, email: &str) -> RegistrationRequest {
    RegistrationRequest {
        username: username.to_string(),
        password: password.to_string(),
        email: email.to_string(),
    }
}

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections {
        app, db, mailer, ..
    } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(request("lynx_levin", "password", "lynx@example.com"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::CREATED);

    let body: RegistrationResponse = test::read_body_json(res).await;
    assert_eq!(body.user.username, "lynx_levin");
    assert_eq!(body.user.email, "lynx@example.com");
    assert!(!body.user.is_active);

    let user_in_db = user::Entity::find_by_id(body.user.id)
        .one(&db)
        .await?
        .unwrap();
    assert!(!user_in_db.is_active);
    assert_ne!(user_in_db.password, "password");

    let outbox = mailer.outbox();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].to, "lynx@example.com");
    assert_eq!(outbox[0].subject, "Confirmation link sent on Test Site");

    Ok(())
}

#[actix_web::test]
async fn response_does_not_leak_password() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(request("quiet_user", "password", "quiet@example.com"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert!(body["user"].get("password").is_none());

    Ok(())
}

mod bad_request {
    use super::*;

    #[actix_web::test]
    async fn duplicate_email_ignoring_case() -> Result<(), DbErr> {
        let Connections {
            app, db, mailer, ..
        } = init_app().await?;

        let req = test::TestRequest::post()
            .uri("/api/users/register")
            .set_json(request("first_user", "password", "Shared@Example.com"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/users/register")
            .set_json(request("second_user", "password", "shared@example.COM"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            serde_json::json!({
                "errors": { "email": ["A user with that email already exists."] }
            })
        );
        assert_eq!(user::Entity::find().all(&db).await?.len(), 1);
        assert_eq!(mailer.outbox().len(), 1);

        Ok(())
    }

    #[actix_web::test]
    async fn duplicate_username() -> Result<(), DbErr> {
        let Connections { app, .. } = init_app().await?;

        let req = test::TestRequest::post()
            .uri("/api/users/register")
            .set_json(request("same_name", "password", "one@example.com"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/users/register")
            .set_json(request("same_name", "password", "two@example.com"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(
            body["errors"]["username"],
            serde_json::json!(["A user with that username already exists."])
        );

        Ok(())
    }

    #[actix_web::test]
    async fn missing_fields() -> Result<(), DbErr> {
        let Connections { app, mailer, .. } = init_app().await?;

        let req = test::TestRequest::post()
            .uri("/api/users/register")
            .set_json(serde_json::json!({}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(res).await;
        let required = serde_json::json!(["This field is required."]);
        assert_eq!(body["errors"]["username"], required);
        assert_eq!(body["errors"]["password"], required);
        assert_eq!(body["errors"]["email"], required);
        assert!(mailer.outbox().is_empty());

        Ok(())
    }

    #[actix_web::test]
    async fn null_fields_are_required() -> Result<(), DbErr> {
        let Connections { app, db, .. } = init_app().await?;

        let req = test::TestRequest::post()
            .uri("/api/users/register")
            .set_json(serde_json::json!({
                "username": null,
                "password": "password",
                "email": null,
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            serde_json::json!({
                "errors": {
                    "username": ["This field is required."],
                    "email": ["This field is required."],
                }
            })
        );
        assert!(user::Entity::find().all(&db).await?.is_empty());

        Ok(())
    }

    #[actix_web::test]
    async fn invalid_username_and_email() -> Result<(), DbErr> {
        let Connections { app, db, .. } = init_app().await?;

        let req = test::TestRequest::post()
            .uri("/api/users/register")
            .set_json(request("no spaces allowed", "password", "nope"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(
            body["errors"]["username"],
            serde_json::json!([
                "This value may contain only letters, numbers and /./+/-/_ characters."
            ])
        );
        assert_eq!(
            body["errors"]["email"],
            serde_json::json!(["Enter a valid email address."])
        );
        assert!(body["errors"].get("password").is_none());
        assert!(user::Entity::find().all(&db).await?.is_empty());

        Ok(())
    }
}
