use serde::{Deserialize, Serialize};

/// A named, server-side collection of media/documents usable as retrieval
/// context for prompts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Datasource {
    pub id: i64,
    pub name: String,
    pub summary: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub status: i64,
    pub media_count: i64,
    pub owner_id: i64,
    pub assoc_contexts: Vec<serde_json::Value>,
    pub media: Vec<Media>,
    pub created: String,
    pub modified: String,
}

/// One media entry of a datasource: either an uploaded document (base64
/// payload with mime type and size) or a plain URL reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub name: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl Media {
    /// A URL reference; carries no payload.
    pub fn url(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: "text/x-uri".to_string(),
            base64: None,
            size: None,
        }
    }

    /// An uploaded document with its base64-encoded content.
    pub fn document(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        base64: String,
        size: u64,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            base64: Some(base64),
            size: Some(size),
        }
    }
}
