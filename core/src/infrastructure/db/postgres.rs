use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info};

use crate::domain::common::{DatabaseConfig, entities::app_errors::CoreError};

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    /// Connects and applies pending migrations.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, CoreError> {
        let mut options = ConnectOptions::new(config.url());
        options
            .max_connections(10)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let db = Database::connect(options).await.map_err(|e| {
            error!("Failed to connect to database: {}", e);
            CoreError::Persistence(format!("could not connect to database: {}", e))
        })?;

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await
            .map_err(|e| {
                error!("Failed to run migrations: {}", e);
                CoreError::Persistence(format!("could not run migrations: {}", e))
            })?;

        info!(host = %config.host, database = %config.name, "connected to database");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
