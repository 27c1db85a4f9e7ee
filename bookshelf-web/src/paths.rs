//! Helpers for constructing URLs to static assets that respect the deployment base path.
use bookshelf_core::constants::CATALOGUE_PATH;

/// When `PUBLIC_URL` is set at compile time (e.g., `/shelf` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Where the catalogue document is fetched from.
///
/// `BOOKSHELF_CATALOGUE_URL` replaces the whole URL; otherwise the catalogue
/// sits next to the page under the deployment base.
#[must_use]
pub fn catalogue_url() -> String {
    catalogue_url_with(
        option_env!("BOOKSHELF_CATALOGUE_URL"),
        option_env!("PUBLIC_URL").unwrap_or(""),
    )
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn catalogue_url_with(override_url: Option<&str>, base: &str) -> String {
    match override_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => url.to_string(),
        None => asset_path_with_base(CATALOGUE_PATH, base),
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_path_with_base, catalogue_url_with};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path_with_base("images/a.svg", ""), "/images/a.svg");
        assert_eq!(asset_path_with_base("/images/a.svg", ""), "/images/a.svg");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            asset_path_with_base("books.json", "/shelf"),
            "/shelf/books.json"
        );
        assert_eq!(
            asset_path_with_base("/books.json", "/shelf/"),
            "/shelf/books.json"
        );
    }

    #[test]
    fn catalogue_defaults_next_to_page() {
        assert_eq!(catalogue_url_with(None, ""), "/books.json");
        assert_eq!(catalogue_url_with(Some("  "), "/shelf"), "/shelf/books.json");
    }

    #[test]
    fn catalogue_override_wins() {
        assert_eq!(
            catalogue_url_with(Some("https://cdn.example/books.json"), "/shelf"),
            "https://cdn.example/books.json"
        );
    }
}
