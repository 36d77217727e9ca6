use std::path::{Path, PathBuf};

use crate::PathResolver;

/// Where a picker session resolves typed paths from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootContext {
    /// Workspace folder the session treats as its root.
    pub root_directory: PathBuf,
    /// Directory of the active document relative to the root, or empty.
    pub relative_base: String,
}

impl RootContext {
    /// Picks the root for a new session.
    ///
    /// With an active document the root is the innermost workspace folder
    /// containing it and the base is the document's directory inside that
    /// folder. Without one, the first workspace folder is used with an empty
    /// base. Returns `None` when no folder qualifies.
    pub fn discover(active_document: Option<&Path>, workspace_folders: &[PathBuf]) -> Option<Self> {
        match active_document {
            Some(document) => {
                let folder = workspace_folders
                    .iter()
                    .filter(|folder| document.starts_with(folder))
                    .max_by_key(|folder| folder.components().count())?;

                let relative_base = document
                    .strip_prefix(folder)
                    .ok()
                    .and_then(Path::parent)
                    .map(|parent| parent.to_string_lossy().into_owned())
                    .unwrap_or_default();

                Some(Self { root_directory: folder.clone(), relative_base })
            }
            None => workspace_folders.first().map(|folder| Self {
                root_directory: folder.clone(),
                relative_base: String::new(),
            }),
        }
    }

    pub fn resolver(&self) -> PathResolver {
        PathResolver::new(self.root_directory.to_string_lossy(), self.relative_base.clone())
    }
}
