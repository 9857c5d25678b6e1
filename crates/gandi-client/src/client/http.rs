//! JSON-over-HTTP client implementation for the gandi service.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use crate::client::EntityService;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::types::{
    routes, CreateCollectionBody, DeleteRequest, EntitiesBody, Entity, Envelope, GetBody,
    DEFAULT_COLLECTION, DEFAULT_DIMENSION,
};

/// Header carrying the configured API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// gandi HTTP client
///
/// Holds only the immutable endpoint and a pooled [`reqwest::Client`], so it is
/// cheap to clone and safe to share between tasks.
#[derive(Debug, Clone)]
pub struct GandiClient {
    http_client: Client,
    config: ClientConfig,
    base_url: String,
}

impl GandiClient {
    /// Create a new gandi client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http_client = Self::create_client(&config)?;
        let base_url = config.base_url();
        Ok(Self { http_client, config, base_url })
    }

    /// Create a new client for `host[:port]` with the default API key
    pub fn connect<S: Into<String>>(host: S) -> Result<Self> {
        Self::new(ClientConfig::new(host))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn create_client(config: &ClientConfig) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| ClientError::Configuration(format!("Invalid API key: {}", e)))?;
        headers.insert(API_KEY_HEADER, api_key);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map_err(|e| ClientError::Configuration(format!("Failed to create HTTP client: {}", e)))
    }

    /// POST `body` to `route` and decode the envelope.
    ///
    /// The envelope is read regardless of HTTP status: the service reports
    /// rejected bodies as `{code: 406}` with a matching status line.
    async fn post<B: Serialize + ?Sized>(&self, route: &str, body: &B) -> Result<Envelope> {
        let url = format!("{}{}", self.base_url, route);
        debug!("Sending POST to {}", url);

        let response = self.http_client.post(&url).json(body).send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            ClientError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!("Failed to read response body from {}: {}", url, e);
            ClientError::from(e)
        })?;
        debug!("Received HTTP status {} ({} bytes)", status, text.len());

        serde_json::from_str(&text).map_err(|e| {
            error!("Response from {} is not a JSON envelope: {}", url, e);
            ClientError::from(e)
        })
    }

    /// Map a non-200 envelope to [`ClientError::Remote`] and hand back the payload.
    fn into_payload(envelope: Envelope) -> Result<Option<Value>> {
        if envelope.is_success() {
            Ok(envelope.data)
        } else {
            Err(ClientError::Remote {
                code: envelope.code,
                message: envelope.message,
            })
        }
    }

    /// Create a collection
    #[instrument(skip(self, name), fields(collection = %name))]
    pub async fn create_collection(&self, name: &str, dimension: u32) -> Result<()> {
        let body = CreateCollectionBody { collection_name: name, dimension };
        match Self::into_payload(self.post(routes::CREATE_COLLECTION, &body).await?) {
            Ok(_) => {
                info!("Collection successfully created");
                Ok(())
            }
            Err(e) => {
                warn!("Error in creating collection: {}", e);
                Err(e)
            }
        }
    }

    /// Create the `default` collection with dimension 128
    pub async fn create_default_collection(&self) -> Result<()> {
        self.create_collection(DEFAULT_COLLECTION, DEFAULT_DIMENSION).await
    }

    /// Insert entities into a collection
    #[instrument(skip(self, name, entities), fields(collection = %name, count = entities.len()))]
    pub async fn insert(&self, name: &str, entities: &[Entity]) -> Result<()> {
        let body = EntitiesBody { data: entities, collection_name: name };
        match Self::into_payload(self.post(routes::INSERT, &body).await?) {
            Ok(_) => {
                info!("Insert successful");
                Ok(())
            }
            Err(e) => {
                warn!("Insert failed: {}", e);
                Err(e)
            }
        }
    }

    /// Fetch entities by id
    ///
    /// Returns the envelope's `data` untouched; its shape is defined by the
    /// service. A success envelope without `data` yields [`Value::Null`].
    #[instrument(skip(self, name, ids), fields(collection = %name, count = ids.len()))]
    pub async fn get(&self, name: &str, ids: &[i64]) -> Result<Value> {
        let body = GetBody { collection_name: name, ids };
        match Self::into_payload(self.post(routes::GET, &body).await?) {
            Ok(data) => {
                info!("Get successful");
                Ok(data.unwrap_or(Value::Null))
            }
            Err(e) => {
                warn!("Get failed: {}", e);
                Err(e)
            }
        }
    }

    /// Insert or replace entities by id
    #[instrument(skip(self, name, entities), fields(collection = %name, count = entities.len()))]
    pub async fn upsert(&self, name: &str, entities: &[Entity]) -> Result<()> {
        let body = EntitiesBody { data: entities, collection_name: name };
        match Self::into_payload(self.post(routes::UPSERT, &body).await?) {
            Ok(_) => {
                info!("Upsert successful");
                Ok(())
            }
            Err(e) => {
                warn!("Upsert failed: {}", e);
                Err(e)
            }
        }
    }

    /// Delete entities matching a filter
    #[instrument(skip(self, request), fields(collection = %request.collection_name))]
    pub async fn delete(&self, request: &DeleteRequest) -> Result<()> {
        match Self::into_payload(self.post(routes::DELETE, request).await?) {
            Ok(_) => {
                info!("Delete successful");
                Ok(())
            }
            Err(e) => {
                warn!("Delete failed: {}", e);
                Err(e)
            }
        }
    }
}

#[async_trait]
impl EntityService for GandiClient {
    async fn create_collection(&self, name: &str, dimension: u32) -> Result<()> {
        GandiClient::create_collection(self, name, dimension).await
    }

    async fn insert(&self, name: &str, entities: &[Entity]) -> Result<()> {
        GandiClient::insert(self, name, entities).await
    }

    async fn get(&self, name: &str, ids: &[i64]) -> Result<Value> {
        GandiClient::get(self, name, ids).await
    }

    async fn upsert(&self, name: &str, entities: &[Entity]) -> Result<()> {
        GandiClient::upsert(self, name, entities).await
    }

    async fn delete(&self, request: &DeleteRequest) -> Result<()> {
        GandiClient::delete(self, request).await
    }
}
