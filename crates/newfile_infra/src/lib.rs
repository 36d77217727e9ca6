mod editor;
mod env;
mod fs_create_dirs;
mod fs_meta;
mod fs_write;
mod logger;
mod newfile_infra;

pub use editor::{NewFileEditorService, is_vscode_terminal};
pub use env::NewFileEnvironmentInfra;
pub use logger::TracingLogger;
pub use newfile_infra::*;
