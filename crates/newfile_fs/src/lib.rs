//! Thin async wrappers over `tokio::fs` that attach the offending path to
//! every error.

mod meta;
mod write;

/// Namespace for the file-system helpers.
pub struct NewFileFS;
