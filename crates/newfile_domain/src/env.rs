use std::path::PathBuf;

use derive_setters::Setters;

/// Runtime configuration of the picker, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
#[setters(into, strip_option)]
pub struct Environment {
    /// The current working directory.
    pub cwd: PathBuf,
    /// Program used to open files. `None` selects the platform default.
    pub editor: Option<String>,
    /// Refuse to create anything that resolves outside the workspace root.
    pub confine_to_root: bool,
    /// Directory the rolling log files are written to.
    pub log_dir: PathBuf,
    /// `tracing` filter directives, e.g. `info` or `newfile_app=debug`.
    pub log_filter: Option<String>,
}

impl Environment {
    pub fn new(cwd: PathBuf, log_dir: PathBuf) -> Self {
        Self { cwd, editor: None, confine_to_root: false, log_dir, log_filter: None }
    }
}
