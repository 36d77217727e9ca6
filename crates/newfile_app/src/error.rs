use std::path::{Path, PathBuf};

/// Failures surfaced while handling an accept.
///
/// `Display` is the message shown to the user and never includes the
/// underlying cause; the cause is only written to the log.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Can't create a folder")]
    DirectoryCreation { path: PathBuf, cause: anyhow::Error },

    #[error("Can't create a file")]
    FileCreation { path: PathBuf, cause: anyhow::Error },

    #[error("Can't open a file")]
    Open { path: PathBuf, cause: anyhow::Error },

    #[error("Can't create outside the workspace root")]
    OutsideRoot { path: PathBuf },
}

impl Error {
    pub fn path(&self) -> &Path {
        match self {
            Self::DirectoryCreation { path, .. }
            | Self::FileCreation { path, .. }
            | Self::Open { path, .. }
            | Self::OutsideRoot { path } => path,
        }
    }

    /// Underlying error, if any, formatted with its context chain.
    pub fn cause(&self) -> Option<String> {
        match self {
            Self::DirectoryCreation { cause, .. }
            | Self::FileCreation { cause, .. }
            | Self::Open { cause, .. } => Some(format!("{cause:#}")),
            Self::OutsideRoot { .. } => None,
        }
    }
}
