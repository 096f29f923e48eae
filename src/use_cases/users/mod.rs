pub mod confirm;
pub mod register;
pub mod registration_form;
pub mod resend_email;
pub mod signup_email;
pub mod types;
