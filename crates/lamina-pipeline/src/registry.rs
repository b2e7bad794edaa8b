//! Filesystem-backed overlay source
//!
//! Scans search paths for overlay payload files and serves them by
//! path-relative identifier.

use crate::error::LoadError;
use crate::source::OverlaySource;
use lamina_core::OverlayResource;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extensions recognized as overlay payloads
pub const OVERLAY_EXTENSIONS: [&str; 3] = ["safetensors", "ckpt", "pt"];

/// Directory-scanning [`OverlaySource`]
///
/// Identifiers are slash-separated paths relative to the search path that
/// contains them, extension included. Earlier search paths shadow later
/// ones when resolving.
#[derive(Debug, Clone)]
pub struct DirectoryRegistry {
    search_paths: Vec<PathBuf>,
}

impl DirectoryRegistry {
    /// Create a registry with the default search paths
    pub fn new() -> Self {
        Self {
            search_paths: vec![
                PathBuf::from("overlays"),
                dirs::data_local_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("lamina")
                    .join("overlays"),
            ],
        }
    }

    /// Create a registry over explicit search paths
    pub fn with_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            search_paths: paths.into_iter().collect(),
        }
    }

    /// Add a search path
    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        self.search_paths.push(path.into());
    }

    /// Get search paths
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Scan all search paths for payload files
    pub fn scan(&self) -> Vec<String> {
        let mut found = Vec::new();
        for root in &self.search_paths {
            scan_dir(root, root, &mut found);
        }
        found.sort();
        found.dedup();
        found
    }

    /// Resolve an identifier to the first matching payload path
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.search_paths
            .iter()
            .map(|root| root.join(name))
            .find(|path| path.is_file())
    }
}

fn scan_dir(root: &Path, dir: &Path, found: &mut Vec<String>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                scan_dir(root, &path, found);
            } else if is_overlay_file(&path) {
                if let Ok(rel) = path.strip_prefix(root) {
                    let id = rel
                        .components()
                        .map(|c| c.as_os_str().to_string_lossy())
                        .collect::<Vec<_>>()
                        .join("/");
                    found.push(id);
                }
            }
        }
    }
}

fn is_overlay_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| OVERLAY_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

impl OverlaySource for DirectoryRegistry {
    fn available(&self) -> Vec<String> {
        self.scan()
    }

    fn load(&self, name: &str) -> Result<OverlayResource, LoadError> {
        let path = self
            .resolve(name)
            .ok_or_else(|| LoadError::NotFound(name.to_string()))?;

        debug!(overlay = name, path = %path.display(), "reading overlay payload");
        let data = fs::read(&path)?;
        Ok(OverlayResource::new(path, data))
    }
}

impl Default for DirectoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn registry_with_files(files: &[&str]) -> (TempDir, DirectoryRegistry) {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, file.as_bytes()).unwrap();
        }
        let registry = DirectoryRegistry::with_paths([dir.path().to_path_buf()]);
        (dir, registry)
    }

    #[test]
    fn test_scan_finds_nested_payloads() {
        let (_dir, registry) = registry_with_files(&[
            "foo.safetensors",
            "styles/abstract.safetensors",
            "old/model.ckpt",
            "notes.txt",
        ]);

        let found = registry.scan();
        assert_eq!(
            found,
            vec![
                "foo.safetensors".to_string(),
                "old/model.ckpt".to_string(),
                "styles/abstract.safetensors".to_string(),
            ]
        );
    }

    #[test]
    fn test_load_reads_payload() {
        let (_dir, registry) = registry_with_files(&["styles/abstract.safetensors"]);

        let resource = registry.load("styles/abstract.safetensors").unwrap();
        assert_eq!(resource.data, b"styles/abstract.safetensors".to_vec());
        assert!(resource.source.ends_with("styles/abstract.safetensors"));
    }

    #[test]
    fn test_load_missing_payload() {
        let (_dir, registry) = registry_with_files(&[]);

        let err = registry.load("ghost.safetensors").unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_earlier_search_path_shadows_later() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("foo.safetensors"), b"first").unwrap();
        fs::write(second.path().join("foo.safetensors"), b"second").unwrap();

        let registry = DirectoryRegistry::with_paths([
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);

        assert_eq!(registry.load("foo.safetensors").unwrap().data, b"first");
        // Both paths contribute to availability, deduplicated by name.
        assert_eq!(registry.available(), vec!["foo.safetensors".to_string()]);
    }

    #[test]
    fn test_missing_search_path_is_empty() {
        let registry = DirectoryRegistry::with_paths([PathBuf::from("/nonexistent/lamina")]);
        assert!(registry.scan().is_empty());
    }
}
