mod health_check;
mod users;
mod utils;
