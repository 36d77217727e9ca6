use std::path::Path;
use std::process::Stdio;

use anyhow::Context;
use newfile_app::EditorInfra;
use tokio::process::Command;

/// Checks if running in a VS Code integrated terminal.
pub fn is_vscode_terminal() -> bool {
    std::env::var("TERM_PROGRAM")
        .map(|val| val == "vscode")
        .unwrap_or(false)
        || std::env::var("VSCODE_PID").is_ok()
        || std::env::var("VSCODE_GIT_IPC_HANDLE").is_ok()
}

/// How a document gets opened.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Launcher {
    /// A user-configured program plus its leading arguments.
    Command { program: String, args: Vec<String> },
    /// The system handler for the file type.
    System,
}

impl Launcher {
    fn resolve(editor: Option<&str>, in_vscode: bool) -> Self {
        if let Some(editor) = editor {
            let mut parts = editor.split_whitespace().map(str::to_string);
            if let Some(program) = parts.next() {
                return Self::Command { program, args: parts.collect() };
            }
        }
        if in_vscode {
            return Self::Command {
                program: "code".to_string(),
                args: vec!["--reuse-window".to_string()],
            };
        }
        Self::System
    }
}

/// Opens files in an external editor without waiting for it to exit.
pub struct NewFileEditorService {
    launcher: Launcher,
}

impl NewFileEditorService {
    pub fn new(editor: Option<String>) -> Self {
        Self { launcher: Launcher::resolve(editor.as_deref(), is_vscode_terminal()) }
    }
}

#[async_trait::async_trait]
impl EditorInfra for NewFileEditorService {
    async fn open(&self, path: &Path) -> anyhow::Result<()> {
        match &self.launcher {
            Launcher::Command { program, args } => {
                tracing::debug!(program, path = %path.display(), "Launching editor");
                Command::new(program)
                    .args(args)
                    .arg(path)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                    .with_context(|| format!("Failed to launch editor {program}"))?;
                Ok(())
            }
            Launcher::System => open::that_detached(path)
                .with_context(|| format!("Failed to open {}", path.display())),
        }
    }
}
