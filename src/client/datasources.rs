use crate::client::AiManClient;
use crate::documents::{file_name, loader_for_path, looks_like_url};
use crate::routes::Route;
use crate::types::{Datasource, Media};
use crate::{Error, Result};
use reqwest::Method;
use serde_json::json;
use std::path::Path;
use tracing::debug;

impl AiManClient {
    /// Fetch every datasource of the authenticated user, fully populated.
    ///
    /// The list route only returns summaries, so each entry is fetched again
    /// by id.
    pub async fn fetch_all_datasources(&self) -> Result<Vec<Datasource>> {
        let payload = self
            .dispatcher
            .execute(Method::GET, Route::Datasources, None)
            .await?;
        let entries = payload
            .get("datasources")
            .and_then(serde_json::Value::as_array)
            .ok_or_else(|| Error::malformed_response("missing datasources in list payload"))?;

        let mut datasources = Vec::with_capacity(entries.len());
        for entry in entries {
            let id = entry
                .get("id")
                .and_then(serde_json::Value::as_i64)
                .ok_or_else(|| Error::malformed_response("datasource entry without id"))?;
            datasources.push(self.get_datasource_by_id(id).await?);
        }
        Ok(datasources)
    }

    /// Fetch a single datasource by id.
    pub async fn get_datasource_by_id(&self, id: i64) -> Result<Datasource> {
        let payload = self
            .dispatcher
            .execute(Method::GET, Route::Datasource { id }, None)
            .await?;
        let source = payload
            .get("datasource")
            .ok_or_else(|| Error::malformed_response("missing datasource in payload"))?;
        serde_json::from_value(source.clone()).map_err(Error::from)
    }

    /// Create an empty datasource and return its id.
    pub async fn init_new_datasource(
        &self,
        name: &str,
        summary: &str,
        tags: &[String],
        categories: &[String],
    ) -> Result<i64> {
        let body = json!({
            "name": name,
            "summary": summary,
            "tags": tags,
            "categories": categories,
            "assocContexts": [],
            "media": [],
        });
        let payload = self
            .dispatcher
            .execute(Method::POST, Route::Datasources, Some(&body))
            .await?;
        payload
            .get("datasource")
            .and_then(|source| source.get("id"))
            .and_then(serde_json::Value::as_i64)
            .ok_or_else(|| Error::malformed_response("created datasource has no id"))
    }

    /// Update an existing datasource and return the service's updated record.
    pub async fn update_datasource(&self, datasource: &Datasource) -> Result<serde_json::Value> {
        let body = json!({
            "name": datasource.name,
            "summary": datasource.summary,
            "categories": datasource.categories,
            "tags": datasource.tags,
            "assocContexts": datasource.assoc_contexts,
            "media": datasource.media,
        });
        self.dispatcher
            .execute(
                Method::PUT,
                Route::Datasource { id: datasource.id },
                Some(&body),
            )
            .await
    }

    /// Delete a datasource by id. Returns the raw HTTP status code; callers
    /// interpret it (200/204 as success).
    pub async fn delete_datasource(&self, id: i64) -> Result<u16> {
        self.dispatcher
            .execute_delete(Route::Datasource { id })
            .await
    }

    /// Add documents (file paths or URLs) to a datasource's media list.
    ///
    /// URLs become plain references; files are mapped to a loader by
    /// extension (unsupported types fail before any upload), read through
    /// the document-reader seam and base64-encoded. The enlarged datasource
    /// is then written back with a single update call.
    pub async fn add_documents(
        &self,
        datasource_id: i64,
        sources: &[String],
    ) -> Result<serde_json::Value> {
        let mut datasource = self.get_datasource_by_id(datasource_id).await?;

        for entry in sources {
            if looks_like_url(entry) {
                datasource.media.push(Media::url(entry.clone()));
                continue;
            }
            let path = Path::new(entry);
            let (loader, mime_type) = loader_for_path(path)?;
            let content = self.reader.read(path, loader)?;
            let size = content.byte_len() as u64;
            debug!(file = %entry, mime = %mime_type, size, "adding document to datasource");
            datasource
                .media
                .push(Media::document(file_name(path), mime_type, content.to_base64(), size));
        }

        self.update_datasource(&datasource).await
    }
}
