//! Browser implementation of the catalogue source.

use bookshelf_core::{CatalogueError, CatalogueSource};

/// Fetches the catalogue document over HTTP with the browser `fetch` API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebCatalogueSource {
    url: String,
}

impl WebCatalogueSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Source for the deployed catalogue (see [`crate::paths::catalogue_url`]).
    #[must_use]
    pub fn deployed() -> Self {
        Self::new(crate::paths::catalogue_url())
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogueSource for WebCatalogueSource {
    #[cfg(target_arch = "wasm32")]
    async fn fetch_document(&self) -> Result<String, CatalogueError> {
        use crate::dom;

        let response = dom::fetch_response(&self.url)
            .await
            .map_err(|err| CatalogueError::Request(dom::js_error_message(&err)))?;
        if !response.ok() {
            return Err(CatalogueError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }
        dom::response_text(&response)
            .await
            .map_err(|err| CatalogueError::Request(dom::js_error_message(&err)))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn fetch_document(&self) -> Result<String, CatalogueError> {
        Err(CatalogueError::Request(format!(
            "cannot fetch {} outside the browser",
            self.url
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn deployed_source_points_at_catalogue() {
        assert!(WebCatalogueSource::deployed().url().ends_with("books.json"));
    }

    #[test]
    fn native_fetch_reports_request_error() {
        let source = WebCatalogueSource::new("/books.json");
        let err = block_on(source.fetch_document()).unwrap_err();
        assert!(matches!(err, CatalogueError::Request(msg) if msg.contains("/books.json")));
    }
}
