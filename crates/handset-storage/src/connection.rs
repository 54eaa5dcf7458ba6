use std::sync::Arc;
use std::time::Duration;

use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::info;

use crate::error::{StorageError, StorageResult};
use crate::models::DeviceDocument;
use crate::repositories::{DeviceStore, MongoDeviceRepository};

/// Database connection configuration for MongoDB
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection string
    pub uri: String,

    /// Database holding the device collection
    pub database: String,

    /// Collection holding device documents
    pub collection: String,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Minimum number of idle connections to maintain
    pub min_pool_size: u32,

    /// Timeout for establishing a connection, in seconds
    pub connect_timeout_secs: u64,

    /// Timeout for selecting a server for an operation, in seconds
    pub server_selection_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017/".to_string(),
            database: "deviceDB".to_string(),
            collection: "listings".to_string(),
            max_pool_size: 10,
            min_pool_size: 0,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

impl DatabaseConfig {
    /// Create a new database configuration with the given connection string
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Default::default()
        }
    }

    /// Set the database name
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the collection name
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Set the maximum number of connections in the pool
    pub fn max_pool_size(mut self, max: u32) -> Self {
        self.max_pool_size = max;
        self
    }

    /// Set the minimum number of idle connections
    pub fn min_pool_size(mut self, min: u32) -> Self {
        self.min_pool_size = min;
        self
    }

    /// Set the connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout_secs = timeout.as_secs();
        self
    }

    /// Check the configuration before any connection attempt
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Configuration` for empty names or an inverted
    /// pool range.
    pub fn validate(&self) -> StorageResult<()> {
        if self.uri.trim().is_empty() {
            return Err(StorageError::Configuration("uri must not be empty".to_string()));
        }
        if self.database.trim().is_empty() {
            return Err(StorageError::Configuration(
                "database must not be empty".to_string(),
            ));
        }
        if self.collection.trim().is_empty() {
            return Err(StorageError::Configuration(
                "collection must not be empty".to_string(),
            ));
        }
        if self.min_pool_size > self.max_pool_size {
            return Err(StorageError::Configuration(format!(
                "min_pool_size ({}) exceeds max_pool_size ({})",
                self.min_pool_size, self.max_pool_size
            )));
        }
        Ok(())
    }
}

/// Process-wide MongoDB connection
///
/// The underlying [`Client`] (and its connection pool) is created lazily on
/// the first [`acquire`](DeviceStore::acquire) and reused for the lifetime of
/// the process. Clones share the same client. Each acquisition derives a
/// fresh `ClientSession`, which is what request handlers operate on.
///
/// # Example
///
/// ```no_run
/// use handset_storage::connection::{Database, DatabaseConfig};
/// use handset_storage::repositories::{DeviceRepository, DeviceStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DatabaseConfig::new("mongodb://localhost:27017/")
///     .database("deviceDB")
///     .collection("listings");
///
/// let db = Database::new(config)?;
///
/// // First acquisition connects; later ones reuse the client
/// let handle = db.acquire().await?;
/// let devices = handle.find_all().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    config: Arc<DatabaseConfig>,
    client: Arc<OnceCell<Client>>,
}

impl Database {
    /// Create a database handle without connecting
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Configuration` if the configuration is invalid.
    pub fn new(config: DatabaseConfig) -> StorageResult<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            client: Arc::new(OnceCell::new()),
        })
    }

    /// Get the configuration this database was built from
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Whether the process-wide client has been created yet
    pub fn is_connected(&self) -> bool {
        self.client.initialized()
    }

    /// Get the shared client, creating it on first use
    async fn client(&self) -> StorageResult<&Client> {
        self.client
            .get_or_try_init(|| async {
                info!(
                    database = %self.config.database,
                    collection = %self.config.collection,
                    "Connecting to MongoDB"
                );

                let mut options = ClientOptions::parse(&self.config.uri).await.map_err(|e| {
                    StorageError::Configuration(format!("Invalid connection string: {}", e))
                })?;
                options.app_name = Some("handset".to_string());
                options.max_pool_size = Some(self.config.max_pool_size);
                options.min_pool_size = Some(self.config.min_pool_size);
                options.connect_timeout = Some(Duration::from_secs(self.config.connect_timeout_secs));
                options.server_selection_timeout =
                    Some(Duration::from_secs(self.config.server_selection_timeout_secs));

                Ok::<_, StorageError>(Client::with_options(options)?)
            })
            .await
    }

    async fn collection(&self) -> StorageResult<(Client, Collection<DeviceDocument>)> {
        let client = self.client().await?.clone();
        let collection = client
            .database(&self.config.database)
            .collection::<DeviceDocument>(&self.config.collection);
        Ok((client, collection))
    }
}

impl DeviceStore for Database {
    type Handle = MongoDeviceRepository;

    async fn acquire(&self) -> StorageResult<MongoDeviceRepository> {
        let (client, collection) = self.collection().await?;
        let session = client.start_session(None).await?;
        Ok(MongoDeviceRepository::new(collection, session))
    }
}
