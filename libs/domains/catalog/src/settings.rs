use core_config::{env_parse_or, env_required_any, ConfigError, FromEnv};

/// Connection settings for the catalog database
///
/// The three logical values (connection string, database name, collection
/// name) are required. Pool and timeout settings fall back to defaults.
///
/// # Example
///
/// ```ignore
/// use domain_catalog::DatabaseSettings;
///
/// let settings = DatabaseSettings::new("mongodb://localhost:27017", "CatalogDb", "Products")
///     .with_app_name("catalog");
///
/// // From environment variables
/// let settings = DatabaseSettings::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub connection_string: String,
    pub database_name: String,
    pub collection_name: String,
    /// Optional application name for server logs
    pub app_name: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout_secs: u64,
    pub server_selection_timeout_secs: u64,
}

const DEFAULT_MAX_POOL_SIZE: u32 = 100;
const DEFAULT_MIN_POOL_SIZE: u32 = 5;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SERVER_SELECTION_TIMEOUT_SECS: u64 = 30;

impl DatabaseSettings {
    pub fn new(
        connection_string: impl Into<String>,
        database_name: impl Into<String>,
        collection_name: impl Into<String>,
    ) -> Self {
        Self {
            connection_string: connection_string.into(),
            database_name: database_name.into(),
            collection_name: collection_name.into(),
            app_name: None,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            min_pool_size: DEFAULT_MIN_POOL_SIZE,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            server_selection_timeout_secs: DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_pool_size(mut self, max_pool_size: u32, min_pool_size: u32) -> Self {
        self.max_pool_size = max_pool_size;
        self.min_pool_size = min_pool_size;
        self
    }

    pub fn with_timeouts(mut self, connect_secs: u64, server_selection_secs: u64) -> Self {
        self.connect_timeout_secs = connect_secs;
        self.server_selection_timeout_secs = server_selection_secs;
        self
    }

    /// Reject blank connection string, database name or collection name
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("connection_string", &self.connection_string),
            ("database_name", &self.database_name),
            ("collection_name", &self.collection_name),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ConfigError::EmptyValue((*name).to_string())),
            None => Ok(()),
        }
    }
}

/// Load settings from environment variables
///
/// - `CATALOG_CONNECTION_STRING` or `MONGODB_URL` (required)
/// - `CATALOG_DATABASE_NAME` or `MONGODB_DATABASE` (required)
/// - `CATALOG_COLLECTION_NAME` or `MONGODB_COLLECTION` (required)
/// - `MONGODB_APP_NAME` (optional)
/// - `MONGODB_MAX_POOL_SIZE` (default: 100)
/// - `MONGODB_MIN_POOL_SIZE` (default: 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default: 30)
impl FromEnv for DatabaseSettings {
    fn from_env() -> Result<Self, ConfigError> {
        let settings = Self {
            connection_string: env_required_any(&["CATALOG_CONNECTION_STRING", "MONGODB_URL"])?,
            database_name: env_required_any(&["CATALOG_DATABASE_NAME", "MONGODB_DATABASE"])?,
            collection_name: env_required_any(&["CATALOG_COLLECTION_NAME", "MONGODB_COLLECTION"])?,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parse_or("MONGODB_MAX_POOL_SIZE", DEFAULT_MAX_POOL_SIZE)?,
            min_pool_size: env_parse_or("MONGODB_MIN_POOL_SIZE", DEFAULT_MIN_POOL_SIZE)?,
            connect_timeout_secs: env_parse_or(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            server_selection_timeout_secs: env_parse_or(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
            )?,
        };

        settings.validate()?;
        Ok(settings)
    }
}
