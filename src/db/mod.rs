use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};

use crate::errors::AppResult;

const APP_NAME: &str = "smart-study-partner";
const MAX_POOL_SIZE: u32 = 10;
const MIN_POOL_SIZE: u32 = 2;
const TIMEOUT: Duration = Duration::from_secs(5);

/// Document-store handle for the Mongo notes backend.
#[derive(Clone)]
pub struct Database {
    client: Client,
    db_name: String,
}

/// Parses the connection string and applies pool sizing, timeouts, and the
/// stable server API.
pub async fn client_options(conn_string: &str) -> AppResult<ClientOptions> {
    let mut options = ClientOptions::parse(conn_string).await?;
    options.app_name = Some(APP_NAME.to_string());
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options.max_pool_size = Some(MAX_POOL_SIZE);
    options.min_pool_size = Some(MIN_POOL_SIZE);
    options.connect_timeout = Some(TIMEOUT);
    options.server_selection_timeout = Some(TIMEOUT);
    Ok(options)
}

impl Database {
    /// Connects and pings the deployment once.
    pub async fn connect(conn_string: &str, db_name: &str) -> AppResult<Self> {
        let client = Client::with_options(client_options(conn_string).await?)?;
        let database = Self {
            client,
            db_name: db_name.to_string(),
        };

        database.health_check().await?;
        log::info!("Connected to MongoDB database {}", db_name);
        Ok(database)
    }

    pub fn get_collection<T>(&self, collection_name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.client
            .database(&self.db_name)
            .collection(collection_name)
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}
