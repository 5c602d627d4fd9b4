//! Book list locations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Book lists refreshed when no file is named on the command line.
pub const DEFAULT_FILES: [&str; 2] = ["books(full-list).json", "books(book-club).json"];

fn default_files() -> Vec<String> {
    DEFAULT_FILES.iter().map(ToString::to_string).collect()
}

fn default_root() -> String {
    String::from(".")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Book list files, relative to `root` unless absolute.
    #[serde(default = "default_files")]
    pub files: Vec<String>,

    /// Directory holding the book lists.
    #[serde(default = "default_root")]
    pub root: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            files: default_files(),
            root: default_root(),
        }
    }
}

impl CatalogConfig {
    /// Resolve configured files against `root`.
    #[must_use]
    pub fn resolved_files(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| self.resolve(f)).collect()
    }

    /// Resolve a single path against `root`; absolute paths are kept.
    #[must_use]
    pub fn resolve(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            Path::new(&self.root).join(path)
        }
    }
}
