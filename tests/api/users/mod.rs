mod register;
mod resend_email;
