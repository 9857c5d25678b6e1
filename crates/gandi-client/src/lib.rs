//! # gandi-client
//!
//! Client library for the gandi collection and vector entity service.
//! Every operation is a single JSON POST against a fixed route; the service
//! answers with a `{code, data?}` envelope where `code == 200` means success.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gandi_client::{ClientConfig, Entity, GandiClient};
//! use std::error::Error;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn Error>> {
//!     let client = GandiClient::new(ClientConfig::new("localhost:8080"))?;
//!
//!     client.create_collection("test15", 5).await?;
//!     client
//!         .insert("test15", &[Entity::new(1, vec![0.1, 0.1, 0.1, 0.1, 0.1])])
//!         .await?;
//!
//!     let data = client.get("test15", &[1, 2, 3]).await?;
//!     println!("{}", data);
//!
//!     Ok(())
//! }
//! ```
//!
//! The API key given to [`ClientConfig::with_api_key`] (default `"default"`)
//! is sent as an `x-api-key` header. Requests use plain `http` unless
//! [`ClientConfig::with_tls`] is set.

pub mod error;
pub mod config;
pub mod types;
pub mod client;

pub use client::http::GandiClient;
pub use client::EntityService;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use types::{DeleteRequest, Entity, Envelope, DEFAULT_COLLECTION, DEFAULT_DIMENSION};
