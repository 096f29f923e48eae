use actix_web::{http, test};
use sea_orm::DbErr;

use crate::utils::{init_app, Connections};

#[actix_web::test]
async fn health_check() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/health-check")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    Ok(())
}
