use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

use crate::settings::types::Settings;

/// Connects to the configured database and brings the schema up to date.
pub async fn init_db(settings: &Settings) -> Result<DbConn, DbErr> {
    let mut options = ConnectOptions::new(settings.database.url.clone());
    options
        .max_connections(settings.database.max_connections)
        .min_connections(1)
        .sqlx_logging(settings.debug);

    let db_conn = Database::connect(options).await?;
    Migrator::up(&db_conn, None).await?;
    Ok(db_conn)
}
