mod users;
mod utils;

pub use users::auth_routes;
