use bookshelf_core::{CatalogueError, CatalogueSource};
use std::path::{Path, PathBuf};

/// Reads the catalogue document from disk, the way the page would fetch it.
#[derive(Debug, Clone)]
pub struct FileCatalogueSource {
    path: PathBuf,
}

impl FileCatalogueSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogueSource for FileCatalogueSource {
    async fn fetch_document(&self) -> Result<String, CatalogueError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::load_catalogue;

    fn temp_file(label: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "bookshelf-fixture-{label}-{}.json",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        std::fs::write(&path, body).expect("write fixture");
        path
    }

    #[test]
    fn reads_catalogue_from_disk() {
        let path = temp_file("ok", r#"{"books": [{"id": "b1", "title": "Dune"}]}"#);
        let source = FileCatalogueSource::new(&path);
        let catalogue = tokio_test::block_on(load_catalogue(&source)).expect("catalogue");
        assert_eq!(catalogue.len(), 1);
        assert_eq!(source.path(), path.as_path());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = FileCatalogueSource::new("/definitely/not/here/books.json");
        let err = tokio_test::block_on(load_catalogue(&source)).expect_err("missing file");
        assert!(matches!(err, CatalogueError::Io(_)));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = temp_file("bad", "{ not json");
        let err = tokio_test::block_on(load_catalogue(&FileCatalogueSource::new(path)))
            .expect_err("bad json");
        assert!(matches!(err, CatalogueError::Parse(_)));
    }
}
