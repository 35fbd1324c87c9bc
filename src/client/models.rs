use crate::client::AiManClient;
use crate::routes::Route;
use crate::types::Model;
use crate::{Error, Result};
use reqwest::Method;

impl AiManClient {
    /// List the models available to the authenticated user.
    pub async fn get_models(&self) -> Result<Vec<Model>> {
        let payload = self
            .dispatcher
            .execute(Method::GET, Route::Models, None)
            .await?;
        let models = payload
            .get("Models")
            .ok_or_else(|| Error::malformed_response("missing Models in list payload"))?;
        serde_json::from_value(models.clone()).map_err(Error::from)
    }
}
