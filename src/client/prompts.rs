use crate::client::AiManClient;
use crate::documents::{file_name, DocumentContent, Loader};
use crate::routes::Route;
use crate::types::{Attachment, Prompt, PromptOptions};
use crate::{Error, Result};
use reqwest::Method;
use std::path::PathBuf;

/// Everything a prompt submission can carry.
///
/// Each recognized option is an explicit field, so presence and types are
/// checked at compile time rather than by runtime key inspection.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    model_tag: String,
    query: String,
    loader: Option<Loader>,
    file_append_to_query: Option<PathBuf>,
    files_to_rag: Vec<PathBuf>,
    options: Option<PromptOptions>,
}

impl PromptRequest {
    pub fn new(model_tag: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            model_tag: model_tag.into(),
            query: query.into(),
            loader: None,
            file_append_to_query: None,
            files_to_rag: Vec::new(),
            options: None,
        }
    }

    /// Loader used for any file given via [`append_file`](Self::append_file)
    /// or [`rag_file`](Self::rag_file).
    pub fn loader(mut self, loader: Loader) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Extract this file's content and append it to the query text. Images
    /// become base64 attachments instead.
    pub fn append_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_append_to_query = Some(path.into());
        self
    }

    /// Attach this file's content, base64-encoded, as retrieval context.
    pub fn rag_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files_to_rag.push(path.into());
        self
    }

    pub fn options(mut self, options: PromptOptions) -> Self {
        self.options = Some(options);
        self
    }
}

impl AiManClient {
    /// Submit a prompt, optionally enriched with document content or file
    /// attachments, and return the service's response object.
    pub async fn prompt(&self, request: PromptRequest) -> Result<serde_json::Value> {
        let mut query = request.query.clone();
        let mut attachments: Vec<Attachment> = Vec::new();

        if let Some(loader) = request.loader {
            if request.file_append_to_query.is_none() && request.files_to_rag.is_empty() {
                return Err(Error::invalid_configuration(
                    "a loader was set but neither an append file nor RAG files were given",
                ));
            }

            if let Some(path) = &request.file_append_to_query {
                let content = self.reader.read(path, loader)?;
                if loader == Loader::Image {
                    attachments.push(Attachment {
                        name: file_name(path),
                        base64: content.to_base64(),
                    });
                } else if let DocumentContent::Text(text) = &content {
                    query.push(' ');
                    query.push_str(text);
                }
            }

            for path in &request.files_to_rag {
                let content = self.reader.read(path, loader)?;
                attachments.push(Attachment {
                    name: file_name(path),
                    base64: content.to_base64(),
                });
            }
        }

        let options = request.options.clone().unwrap_or_default();
        let prompt = Prompt {
            prompt: query,
            ..Default::default()
        };
        let body = assemble_prompt_body(&prompt, &options, &attachments)?;

        self.dispatcher
            .execute(
                Method::POST,
                Route::Prompt {
                    model_tag: request.model_tag.clone(),
                },
                Some(&body),
            )
            .await
    }

    /// Submit a prompt evaluated against a datasource's documents.
    pub async fn prompt_on_datasource(
        &self,
        datasource_id: i64,
        model_tag: &str,
        query: &str,
        options: Option<PromptOptions>,
    ) -> Result<serde_json::Value> {
        let options = options.unwrap_or_default();
        let prompt = Prompt {
            prompt: query.to_string(),
            datasource_id: Some(datasource_id),
            ..Default::default()
        };
        let body = assemble_prompt_body(&prompt, &options, &[])?;

        self.dispatcher
            .execute(
                Method::POST,
                Route::Prompt {
                    model_tag: model_tag.to_string(),
                },
                Some(&body),
            )
            .await
    }
}

/// Merge the prompt record, its options and any attachments into the wire
/// body `{prompt, ..., options, attachments?}`.
fn assemble_prompt_body(
    prompt: &Prompt,
    options: &PromptOptions,
    attachments: &[Attachment],
) -> Result<serde_json::Value> {
    let mut body = serde_json::to_value(prompt)?;
    body["options"] = serde_json::to_value(options)?;
    if !attachments.is_empty() {
        body["attachments"] = serde_json::to_value(attachments)?;
    }
    Ok(body)
}
