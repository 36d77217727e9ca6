use std::panic;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use newfile_app::{CreateNewFileCommand, EnvironmentInfra};
use newfile_infra::NewFileInfra;
use newfile_main::{Cli, PROMPT, init_tracing};
use newfile_select::{NoticeBoard, RawModeGuard, TerminalPicker};

#[tokio::main]
async fn main() -> Result<()> {
    // Leave the terminal usable if anything panics while in raw mode
    panic::set_hook(Box::new(|panic_info| {
        RawModeGuard::restore();
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unexpected error occurred".to_string()
        };

        eprintln!("{}", message.red());
        std::process::exit(1);
    }));

    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    let notices = Arc::new(NoticeBoard::new());
    let infra = Arc::new(NewFileInfra::new(cwd.clone(), notices.clone()));
    let _log_guard = init_tracing(&infra.get_environment(), cli.verbose)?;

    let workspace_folders = cli.workspace_folders(&cwd);
    let active_document = cli.active_document(&cwd);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        command = CreateNewFileCommand::<NewFileInfra<NoticeBoard>>::TITLE,
        "New File Now starting"
    );

    let (picker, input) = TerminalPicker::new(PROMPT, notices.clone());
    CreateNewFileCommand::new(infra)
        .execute(picker, input, active_document.as_deref(), &workspace_folders)
        .await?;

    notices.flush(std::io::stderr())?;
    Ok(())
}
