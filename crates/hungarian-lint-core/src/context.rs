//! Context types for rule execution.

use std::path::{Path, PathBuf};

use crate::estree::Node;
use crate::types::Location;

/// Context provided to per-file rules.
#[derive(Debug, Clone)]
pub struct FileContext {
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl FileContext {
    /// Creates a new file context for `path` under `root`.
    #[must_use]
    pub fn new(path: &Path, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self { relative_path }
    }

    /// Returns the location of `node` within this file.
    #[must_use]
    pub fn location(&self, node: &Node<'_>) -> Location {
        Location::from_position(self.relative_path.clone(), node.position())
    }
}
