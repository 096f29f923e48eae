use actix_http::Request;
use actix_web::{
    dev::{Service, ServiceResponse},
    test,
    web::Data,
    App,
};
use registration_backend::{
    db::init_db,
    settings::{get_test_settings, types::Settings},
    startup::get_routes,
    use_cases::users::signup_email::CONFIRM_PATH,
    utils::emails::{Mailer, OutgoingEmail},
};
use sea_orm::{DbConn, DbErr};

pub struct Connections<S> {
    pub app: S,
    pub db: DbConn,
    pub mailer: Mailer,
    pub settings: Settings,
}

pub async fn init_app() -> Result<
    Connections<impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>>,
    DbErr,
> {
    let settings = get_test_settings();
    let db = init_db(&settings).await?;
    let mailer = Mailer::memory();
    let app = test::init_service(
        App::new()
            .service(get_routes())
            .app_data(Data::new(db.clone()))
            .app_data(Data::new(mailer.clone()))
            .app_data(Data::new(settings.clone())),
    )
    .await;
    Ok(Connections {
        app,
        db,
        mailer,
        settings,
    })
}

/// The path of the activation link in a signup email, without scheme and host.
pub fn activation_path(email: &OutgoingEmail) -> String {
    let link = email
        .text_body
        .lines()
        .find(|line| line.contains(CONFIRM_PATH))
        .expect("No activation link in email.");
    let start = link.find(CONFIRM_PATH).unwrap();
    link[start..].trim().to_string()
}
