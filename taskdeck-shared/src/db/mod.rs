/// Database connection establishment
///
/// This module builds the MongoDB client from configuration and verifies
/// connectivity before handing out a database handle. The driver maintains
/// its own connection pool; requests share it and only contend through the
/// storage engine's per-document locking.
///
/// # Example
///
/// ```no_run
/// use taskdeck_shared::db::{connect, DatabaseConfig};
///
/// # async fn example() -> Result<(), mongodb::error::Error> {
/// let config = DatabaseConfig {
///     url: "mongodb://localhost:27017".to_string(),
///     database: "taskdeck".to_string(),
///     max_pool_size: 10,
/// };
///
/// let db = connect(&config).await?;
/// let names = db.list_collection_names(None).await?;
/// # Ok(())
/// # }
/// ```

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::{debug, info};

/// Configuration for the MongoDB connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string (e.g. "mongodb://localhost:27017")
    pub url: String,

    /// Database name to operate on
    pub database: String,

    /// Maximum number of pooled connections
    ///
    /// Default: 10 (suitable for most deployments)
    pub max_pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "taskdeck".to_string(),
            max_pool_size: 10,
        }
    }
}

/// Connects to MongoDB and returns a database handle
///
/// This function:
/// 1. Parses the connection string into client options
/// 2. Applies pool sizing from the configuration
/// 3. Pings the target database to verify connectivity
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the database
/// is unreachable.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, mongodb::error::Error> {
    info!(
        database = %config.database,
        max_pool_size = config.max_pool_size,
        "Connecting to MongoDB"
    );

    let mut options = ClientOptions::parse(&config.url).await?;
    options.max_pool_size = Some(config.max_pool_size);
    options.app_name = Some("taskdeck".to_string());

    let client = Client::with_options(options)?;
    let db = client.database(&config.database);

    health_check(&db).await?;

    info!("MongoDB connection established");
    Ok(db)
}

/// Pings the database to verify it is reachable and responding
pub async fn health_check(db: &Database) -> Result<(), mongodb::error::Error> {
    debug!("Performing database health check");
    db.run_command(doc! { "ping": 1 }, None).await?;
    debug!("Database health check passed");
    Ok(())
}
