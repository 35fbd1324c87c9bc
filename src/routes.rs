//! Logical operation to URL path mapping.
//!
//! Routes are read-only configuration: a static template per operation, with
//! the prompt and datasource routes carrying a positional segment substituted
//! at call time.

use std::fmt;

/// A logical API operation and the URL path it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Authenticate,
    Refresh,
    Models,
    Prompt { model_tag: String },
    Datasources,
    Datasource { id: i64 },
}

impl Route {
    /// Render the path for this route, substituting any placeholder segment.
    pub fn path(&self) -> String {
        match self {
            Route::Authenticate => "/api/v1/auth/authenticate".to_string(),
            Route::Refresh => "/api/v1/auth/refresh".to_string(),
            Route::Models => "/api/v1/models".to_string(),
            Route::Prompt { model_tag } => format!("/api/v1/prompts/{model_tag}"),
            Route::Datasources => "/api/v1/datasources".to_string(),
            Route::Datasource { id } => format!("/api/v1/datasources/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_paths() {
        assert_eq!(Route::Authenticate.path(), "/api/v1/auth/authenticate");
        assert_eq!(Route::Refresh.path(), "/api/v1/auth/refresh");
        assert_eq!(Route::Models.path(), "/api/v1/models");
        assert_eq!(Route::Datasources.path(), "/api/v1/datasources");
    }

    #[test]
    fn placeholder_substitution() {
        let route = Route::Prompt {
            model_tag: "llama2:latest".into(),
        };
        assert_eq!(route.path(), "/api/v1/prompts/llama2:latest");
        assert_eq!(Route::Datasource { id: 42 }.path(), "/api/v1/datasources/42");
    }
}
