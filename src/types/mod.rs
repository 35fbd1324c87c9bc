//! Wire-schema records for the AI-Man service.
//!
//! Field names follow the service's JSON schema: model and datasource
//! records use camelCase, prompt options use snake_case, media entries use
//! the snake keys of the upload contract.

mod datasource;
mod model;
mod prompt;

pub use datasource::{Datasource, Media};
pub use model::Model;
pub use prompt::{Attachment, Prompt, PromptOptions};
