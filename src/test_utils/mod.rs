use sea_orm::{DbConn, DbErr};

use crate::{
    db, settings::get_test_settings, use_cases::users::signup_email::CONFIRM_PATH,
    utils::emails::OutgoingEmail,
};

pub mod factory;

pub async fn init_db() -> Result<DbConn, DbErr> {
    db::init_db(&get_test_settings()).await
}

/// Pulls the `(uid, token)` pair out of the activation link in a signup email.
pub fn activation_link_parts(email: &OutgoingEmail) -> (String, String) {
    let link = email
        .text_body
        .lines()
        .find(|line| line.contains(CONFIRM_PATH))
        .expect("No activation link in email.");
    let path = link
        .split(CONFIRM_PATH)
        .nth(1)
        .expect("Malformed activation link.")
        .trim_start_matches('/');
    let (uid, token) = path.split_once('/').expect("Malformed activation link.");
    (uid.to_string(), token.trim().to_string())
}
