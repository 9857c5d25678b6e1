//! Wire types for the gandi JSON routes.
//!
//! Field names follow the service's camelCase JSON keys. Request bodies borrow
//! from the caller so a call never clones the entity vectors it sends.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Collection name used when a caller does not pick one.
pub const DEFAULT_COLLECTION: &str = "default";

/// Vector dimension used when a caller does not pick one.
pub const DEFAULT_DIMENSION: u32 = 128;

/// Envelope code that signals success.
pub const SUCCESS_CODE: i64 = 200;

/// Route paths, relative to the service base URL.
pub mod routes {
    pub const CREATE_COLLECTION: &str = "/gandi/collections/create";
    pub const INSERT: &str = "/gandi/entities/insert";
    pub const GET: &str = "/gandi/entities/get";
    pub const UPSERT: &str = "/gandi/entities/upsert";
    pub const DELETE: &str = "/gandi/entities/delete";
}

/// An identified vector record.
///
/// The vector length must match the collection dimension; the service checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: i64,
    pub vector: Vec<f32>,
}

impl Entity {
    pub fn new(id: i64, vector: Vec<f32>) -> Self {
        Self { id, vector }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCollectionBody<'a> {
    pub collection_name: &'a str,
    pub dimension: u32,
}

/// Body shared by insert and upsert.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EntitiesBody<'a> {
    pub data: &'a [Entity],
    pub collection_name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetBody<'a> {
    pub collection_name: &'a str,
    #[serde(rename = "id")]
    pub ids: &'a [i64],
}

/// Delete entities matching a filter expression.
///
/// `database_name` and `partition_name` are omitted from the body when unset;
/// the service then uses its `default` database and `_default` partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    pub collection_name: String,
    pub filter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_name: Option<String>,
}

impl DeleteRequest {
    pub fn new<C: Into<String>, F: Into<String>>(collection_name: C, filter: F) -> Self {
        Self {
            collection_name: collection_name.into(),
            filter: filter.into(),
            database_name: None,
            partition_name: None,
        }
    }

    pub fn with_database<S: Into<String>>(mut self, database_name: S) -> Self {
        self.database_name = Some(database_name.into());
        self
    }

    pub fn with_partition<S: Into<String>>(mut self, partition_name: S) -> Self {
        self.partition_name = Some(partition_name.into());
        self
    }
}

/// The `{code, data?, message?}` wrapper every route answers with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_collection_body_has_only_two_fields() {
        let body = CreateCollectionBody { collection_name: "test15", dimension: 5 };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"collectionName": "test15", "dimension": 5})
        );
    }

    #[test]
    fn test_entities_body_preserves_order() {
        let entities = vec![
            Entity::new(3, vec![0.5]),
            Entity::new(1, vec![0.25]),
        ];
        let body = EntitiesBody { data: &entities, collection_name: "c" };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"data": [{"id": 3, "vector": [0.5]}, {"id": 1, "vector": [0.25]}], "collectionName": "c"})
        );
    }

    #[test]
    fn test_get_body_uses_singular_id_key() {
        let body = GetBody { collection_name: "c", ids: &[1, 2, 3] };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"collectionName": "c", "id": [1, 2, 3]})
        );
    }

    #[test]
    fn test_delete_request_omits_unset_scopes() {
        let request = DeleteRequest::new("c", "id in [1]");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"collectionName": "c", "filter": "id in [1]"})
        );

        let scoped = request.with_database("db").with_partition("p1");
        assert_eq!(
            serde_json::to_value(&scoped).unwrap(),
            json!({"collectionName": "c", "filter": "id in [1]", "databaseName": "db", "partitionName": "p1"})
        );
    }

    #[test]
    fn test_envelope_without_data() {
        let envelope: Envelope = serde_json::from_str(r#"{"code": 500}"#).unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.message, None);
    }

    #[test]
    fn test_envelope_with_data_and_message() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"code": 200, "data": [{"id": 1}], "message": "ok"}"#).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.data, Some(json!([{"id": 1}])));
        assert_eq!(envelope.message.as_deref(), Some("ok"));
    }

    #[test]
    fn test_envelope_requires_code() {
        assert!(serde_json::from_str::<Envelope>(r#"{"data": []}"#).is_err());
    }
}
