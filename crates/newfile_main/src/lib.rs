mod cli;
mod logging;
mod paths;

pub use cli::Cli;
pub use logging::init_tracing;
pub use paths::absolute_path;

/// Prompt shown in front of the picker input.
pub const PROMPT: &str = "New file or folder ›";
