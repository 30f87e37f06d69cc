//! Template key → file path resolution and static rendering.

use crate::error::{HttpError, HttpResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves template keys to files and streams their contents.
///
/// Routes come from an explicit key → path map, optionally topped up by
/// [`auto_discover`](Self::auto_discover), which registers every regular
/// file in the root directory under its file stem. Explicit routes always
/// win over discovered ones.
#[derive(Debug)]
pub struct TemplateRouter {
    root: PathBuf,
    routes: BTreeMap<String, PathBuf>,
}

impl TemplateRouter {
    /// Creates a router over a template root directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            routes: BTreeMap::new(),
        }
    }

    /// Registers an explicit route. Relative paths resolve under the root.
    #[must_use]
    pub fn with_route(mut self, key: &str, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let resolved = if path.is_absolute() {
            path
        } else {
            self.root.join(path)
        };
        self.routes.insert(key.to_string(), resolved);
        self
    }

    /// Scans the root directory, registering every regular file under its
    /// file stem. Existing routes are not overwritten.
    ///
    /// Returns how many files were registered.
    pub fn auto_discover(&mut self) -> HttpResult<usize> {
        let mut discovered = 0;
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };
            if !self.routes.contains_key(&stem) {
                self.routes.insert(stem, path);
                discovered += 1;
            }
        }
        Ok(discovered)
    }

    /// Registered keys, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.routes.keys().map(String::as_str).collect()
    }

    /// Resolves a key to its file path.
    pub fn resolve(&self, key: &str) -> HttpResult<&Path> {
        self.routes
            .get(key)
            .map(PathBuf::as_path)
            .ok_or_else(|| HttpError::unknown_template(key))
    }

    /// Reads the resolved file and returns its contents with a MIME type
    /// derived from the extension.
    pub fn render(&self, key: &str) -> HttpResult<(Vec<u8>, &'static str)> {
        let path = self.resolve(key)?;
        let contents = fs::read(path)?;
        Ok((contents, mime_from_path(path)))
    }
}

fn mime_from_path(path: &Path) -> &'static str {
    match path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .as_deref()
    {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_routes_resolve() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("home.html"), "<h1>hi</h1>").unwrap();

        let router = TemplateRouter::new(dir.path()).with_route("home", "home.html");
        assert_eq!(router.resolve("home").unwrap(), dir.path().join("home.html"));

        let (contents, mime) = router.render("home").unwrap();
        assert_eq!(contents, b"<h1>hi</h1>");
        assert_eq!(mime, "text/html");
    }

    #[test]
    fn unknown_key_is_an_error() {
        let router = TemplateRouter::new("/nonexistent");
        assert!(matches!(
            router.resolve("missing"),
            Err(HttpError::UnknownTemplate { .. })
        ));
    }

    #[test]
    fn auto_discovery_registers_by_stem() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("about.html"), "about").unwrap();
        fs::write(dir.path().join("styles.css"), "body{}").unwrap();
        fs::create_dir(dir.path().join("partials")).unwrap();

        let mut router = TemplateRouter::new(dir.path());
        let discovered = router.auto_discover().unwrap();
        assert_eq!(discovered, 2);
        assert_eq!(router.keys(), vec!["about", "styles"]);

        let (_, mime) = router.render("styles").unwrap();
        assert_eq!(mime, "text/css");
    }

    #[test]
    fn explicit_routes_win_over_discovery() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("home.html"), "discovered").unwrap();
        fs::write(dir.path().join("custom.html"), "explicit").unwrap();

        let mut router = TemplateRouter::new(dir.path()).with_route("home", "custom.html");
        router.auto_discover().unwrap();

        let (contents, _) = router.render("home").unwrap();
        assert_eq!(contents, b"explicit");
    }
}
