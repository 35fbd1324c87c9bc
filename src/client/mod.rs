//! High-level operations: model listing, prompt submission and datasource
//! management. Each one builds a route, shapes a payload, hands it to the
//! dispatcher and maps the unwrapped result back to a domain record.

mod datasources;
mod models;
mod prompts;

pub use prompts::PromptRequest;

use crate::auth::TokenCredential;
use crate::documents::{DocumentReader, FsReader};
use crate::transport::Dispatcher;
use std::sync::Arc;

/// Client for the AI-Man service.
///
/// Holds the shared credential and the dispatcher; all calls go through the
/// dispatcher's single execute path.
pub struct AiManClient {
    credential: Arc<TokenCredential>,
    pub(crate) dispatcher: Dispatcher,
    pub(crate) reader: Arc<dyn DocumentReader>,
}

impl AiManClient {
    /// Create a client with the default filesystem document reader.
    pub fn new(credential: Arc<TokenCredential>) -> Self {
        Self::with_reader(credential, Arc::new(FsReader))
    }

    /// Create a client with a custom document reader (e.g. one backed by a
    /// real PDF/spreadsheet extraction library).
    pub fn with_reader(credential: Arc<TokenCredential>, reader: Arc<dyn DocumentReader>) -> Self {
        let dispatcher = Dispatcher::new(Arc::clone(&credential));
        Self {
            credential,
            dispatcher,
            reader,
        }
    }

    /// The credential this client dispatches with.
    pub fn credential(&self) -> &Arc<TokenCredential> {
        &self.credential
    }
}
