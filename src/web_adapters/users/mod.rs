use actix_web::web::{scope, ServiceConfig};
use registration::{confirm_factory, register_factory, resend_email_factory};

mod registration;

pub fn auth_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/users").service(
            scope("/register")
                .service(register_factory)
                .service(confirm_factory)
                .service(resend_email_factory),
        ),
    );
}
