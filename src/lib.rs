//! # aiman-client
//!
//! Client SDK for the AI-Man model service. It authenticates a user, lists
//! available models, submits prompts (optionally enriched with document
//! content or file attachments) and manages datasources via CRUD calls over
//! HTTP.
//!
//! ## Overview
//!
//! The SDK is strictly layered around two components:
//!
//! - [`TokenCredential`] (leaf): owns the access/refresh token pair and its
//!   expiry, performs the login and refresh network calls, and hands out a
//!   valid bearer token on demand.
//! - [`transport::Dispatcher`]: the single chokepoint every API call passes
//!   through. It ensures the token is fresh, builds the request with a
//!   uniform header set, classifies the response, and unwraps the service's
//!   `{"messageContent": {"data": ...}}` envelope.
//!
//! Everything else (model listing, prompt assembly, datasource field
//! mapping) is thin payload shaping on top of the dispatcher.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aiman_client::{AiManClient, PromptRequest, TokenCredential};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> aiman_client::Result<()> {
//!     let credential =
//!         TokenCredential::authenticate("aiman-api.example.com", "user", "secret").await?;
//!     let client = AiManClient::new(Arc::new(credential));
//!
//!     let models = client.get_models().await?;
//!     println!("{} models available", models.len());
//!
//!     let answer = client
//!         .prompt(PromptRequest::new("llama2:latest", "Say hello"))
//!         .await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`auth`] | Credential lifecycle: login, expiry check, transparent refresh |
//! | [`transport`] | Request dispatch and response envelope unwrapping |
//! | [`client`] | High-level operations: models, prompts, datasources |
//! | [`types`] | Wire-schema records (models, datasources, prompt options) |
//! | [`documents`] | File loader mapping and the document-reader seam |
//! | [`routes`] | Logical operation to URL path templates |

pub mod auth;
pub mod client;
pub mod documents;
pub mod routes;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use auth::{AccessToken, CredentialBuilder, TokenCredential};
pub use client::{AiManClient, PromptRequest};
pub use documents::{DocumentContent, DocumentReader, FsReader, Loader};
pub use routes::Route;
pub use types::{Attachment, Datasource, Media, Model, Prompt, PromptOptions};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
