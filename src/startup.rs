use actix_web::{
    dev::Server,
    web::{scope, Data},
    App, HttpServer, Scope,
};
use sea_orm::DbConn;

use crate::{settings::types::Settings, utils::emails::Mailer, web_adapters::auth_routes};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let db = crate::db::init_db(&settings)
            .await
            .map_err(std::io::Error::other)?;
        let mailer = Mailer::from_settings(&settings.email).map_err(std::io::Error::other)?;
        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = std::net::TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, db, mailer, settings)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn run(
    listener: std::net::TcpListener,
    db: DbConn,
    mailer: Mailer,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let db = Data::new(db);
    let mailer = Data::new(mailer);
    let settings = Data::new(settings);
    let server = HttpServer::new(move || {
        App::new()
            .service(get_routes())
            .app_data(db.clone())
            .app_data(mailer.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub fn get_routes() -> Scope {
    scope("/api").service(health_check).configure(auth_routes)
}

#[actix_web::get("/health-check")]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json("Application is safe and healthy.")
}
