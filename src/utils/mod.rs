pub mod auth;
pub mod base36;
pub mod emails;
