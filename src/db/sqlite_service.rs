use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::info;

#[derive(Clone)]
pub struct SqliteService {
    pub(crate) database_connection: DatabaseConnection,
}

impl SqliteService {
    /// Connects and brings the schema up to date. Does not seed.
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        info!("Connecting to SQLite at {}...", uri);
        let database_connection = Database::connect(uri).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Migrations finished.");
        Ok(Self { database_connection })
    }
}
