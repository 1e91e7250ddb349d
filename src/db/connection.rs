use std::sync::Arc;

use mongodb::bson::doc;
use mongodb::{Client, Database};
use tokio::sync::OnceCell;
use tokio::task::JoinHandle;

use crate::error::AppError;

/// Used when the connection string does not name a database.
pub const DEFAULT_DATABASE: &str = "formulario";

/// Owns the process-wide MongoDB handle.
///
/// The handle is published once, after the first successful `ping`. Until then
/// (or forever, if connecting failed) [`ConnectionManager::database`] reports
/// the store as unavailable.
pub struct ConnectionManager {
    database: OnceCell<Database>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self {
            database: OnceCell::new(),
        }
    }

    /// Connect to `uri` and verify the deployment answers a ping.
    pub async fn connect(&self, uri: &str) -> Result<(), AppError> {
        let client = Client::with_uri_str(uri).await?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

        tracing::info!("Connected to MongoDB database '{}'", database.name());

        if self.database.set(database).is_err() {
            tracing::warn!("MongoDB connection already established, keeping the existing handle");
        }

        Ok(())
    }

    /// Connect in the background. Failure is logged and otherwise swallowed:
    /// the server keeps running and every write reports the store unavailable.
    pub fn spawn_connect(self: &Arc<Self>, uri: String) -> JoinHandle<()> {
        let manager = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(e) = manager.connect(&uri).await {
                tracing::error!("Failed to connect to MongoDB: {e}");
            }
        })
    }

    pub fn database(&self) -> Result<&Database, AppError> {
        self.database
            .get()
            .ok_or_else(|| AppError::StoreUnavailable("no MongoDB connection".to_string()))
    }

    pub fn is_connected(&self) -> bool {
        self.database.initialized()
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}
