use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use newfile_domain::{PickerEvent, RootContext};

use crate::{
    CreationController, EditorInfra, EnvironmentInfra, FileDirectoryInfra, FileInfoInfra,
    FileWriterInfra, LogInfra, NotificationInfra, PickerEvents, PickerSurface,
};

/// The "Create New File or Folder" command.
///
/// Resolves the workspace root, opens a picker session on the given surface
/// and feeds it events until the session ends. Problems inside the session are
/// reported through notifications and never returned to the caller.
pub struct CreateNewFileCommand<I> {
    infra: Arc<I>,
}

impl<I> CreateNewFileCommand<I>
where
    I: EnvironmentInfra
        + FileInfoInfra
        + FileDirectoryInfra
        + FileWriterInfra
        + EditorInfra
        + NotificationInfra
        + LogInfra,
{
    pub const TITLE: &'static str = "Create New File or Folder";
    pub const NO_WORKSPACE: &'static str = "Open a workspace to use New File Now";
    pub const INPUT_FAILED: &'static str = "Can't read picker input";

    pub fn new(infra: Arc<I>) -> Self {
        Self { infra }
    }

    /// Builds a session, or warns and returns `None` when there is no
    /// workspace folder to create files in.
    pub fn prepare<S: PickerSurface>(
        &self,
        surface: S,
        active_document: Option<&Path>,
        workspace_folders: &[PathBuf],
    ) -> Option<CreationController<I, S>> {
        let Some(context) = RootContext::discover(active_document, workspace_folders) else {
            self.infra.show_warning(Self::NO_WORKSPACE);
            return None;
        };

        self.infra.log("Opening a dialog...", "");
        self.infra
            .log("Workspace root:", &context.root_directory.display().to_string());
        self.infra.log("Relative base:", &context.relative_base);

        let confine = self.infra.get_environment().confine_to_root;
        Some(
            CreationController::new(self.infra.clone(), surface, &context)
                .confine_to_root(confine),
        )
    }

    /// Runs a session until it ends. Input failures are logged and reported
    /// as a notice, then end the session like a dismissal.
    pub async fn execute<S, E>(
        &self,
        surface: S,
        mut events: E,
        active_document: Option<&Path>,
        workspace_folders: &[PathBuf],
    ) -> anyhow::Result<()>
    where
        S: PickerSurface,
        E: PickerEvents,
    {
        let Some(mut controller) = self.prepare(surface, active_document, workspace_folders) else {
            return Ok(());
        };

        controller.show().await;
        let mut pending = VecDeque::new();
        while !controller.state().is_terminal() {
            let event = match pending.pop_front() {
                Some(event) => event,
                None => self.next_event(&mut events).await,
            };
            tracing::debug!(?event, "Picker event");
            match event {
                PickerEvent::Accepted => {
                    self.accept(&mut controller, &mut events, &mut pending).await
                }
                event => controller.handle(event).await,
            }
        }
        Ok(())
    }

    /// Runs an accept while still reading input, so that a dismissal cancels
    /// the remaining file-system steps. Every event read meanwhile is queued
    /// and handled once the accept is done.
    async fn accept<S, E>(
        &self,
        controller: &mut CreationController<I, S>,
        events: &mut E,
        pending: &mut VecDeque<PickerEvent>,
    ) where
        S: PickerSurface,
        E: PickerEvents,
    {
        let cancel = controller.cancellation_token();
        let accept = controller.accept();
        tokio::pin!(accept);

        let mut dismissed = false;
        loop {
            tokio::select! {
                biased;
                outcome = &mut accept => {
                    tracing::debug!(?outcome, "Accept finished");
                    break;
                }
                event = self.next_event(events), if !dismissed => {
                    if event == PickerEvent::Dismissed {
                        cancel.cancel();
                        dismissed = true;
                    }
                    pending.push_back(event);
                }
            }
        }
    }

    async fn next_event<E: PickerEvents>(&self, events: &mut E) -> PickerEvent {
        match events.next_event().await {
            Ok(Some(event)) => event,
            Ok(None) => PickerEvent::Dismissed,
            Err(error) => {
                self.infra.log("Picker input failed:", &format!("{error:#}"));
                self.infra.show_error(Self::INPUT_FAILED);
                PickerEvent::Dismissed
            }
        }
    }
}
