//! Client module for the gandi service.
//!
//! [`EntityService`] is the typed contract for the service's routes; [`http`]
//! holds the JSON-over-HTTP implementation of it.

pub mod http;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::types::{DeleteRequest, Entity};

/// Remote operations offered by a gandi service.
///
/// Every call is a single stateless round trip, delivered at most once.
/// Batch operations succeed or fail as a whole.
#[async_trait]
pub trait EntityService: Send + Sync {
    /// Create a collection with a fixed vector dimension.
    async fn create_collection(&self, name: &str, dimension: u32) -> Result<()>;

    /// Insert entities into a collection. An empty slice is still sent.
    async fn insert(&self, name: &str, entities: &[Entity]) -> Result<()>;

    /// Fetch entities by id, returning the service's `data` payload as-is.
    async fn get(&self, name: &str, ids: &[i64]) -> Result<Value>;

    /// Insert or replace entities by id.
    async fn upsert(&self, name: &str, entities: &[Entity]) -> Result<()>;

    /// Delete entities matching a filter expression.
    async fn delete(&self, request: &DeleteRequest) -> Result<()>;
}
