use thiserror::Error;

use crate::catalogue::Catalogue;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the catalogue document comes from.
///
/// Platform-specific implementations should provide this: the web crate
/// fetches over HTTP, the tester reads a file.
#[allow(async_fn_in_trait)] // Hosts are single-threaded; futures need not be `Send`.
pub trait CatalogueSource {
    /// Retrieve the raw catalogue document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be retrieved.
    async fn fetch_document(&self) -> Result<String, CatalogueError>;
}

/// Progress of the single catalogue load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Ready,
    Failed(String),
}

impl LoadState {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ready => "ready",
            Self::Failed(_) => "failed",
        }
    }
}

/// Fetch and parse the catalogue once. Failures are logged here; callers
/// only decide how to present them.
///
/// # Errors
///
/// Returns the retrieval or parse error. There is no retry.
pub async fn load_catalogue<S>(source: &S) -> Result<Catalogue, CatalogueError>
where
    S: CatalogueSource,
{
    let result = match source.fetch_document().await {
        Ok(text) => Catalogue::from_json(&text).map_err(CatalogueError::from),
        Err(err) => Err(err),
    };
    match &result {
        Ok(catalogue) => log::info!("Loaded catalogue with {} items", catalogue.len()),
        Err(err) => log::error!("Error loading catalogue: {err}"),
    }
    result
}
