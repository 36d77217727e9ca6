use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use newfile_domain::{
    AcceptOutcome, PathResolver, PickerEvent, PickerState, RootContext, SuggestionItem,
};
use tokio_util::sync::CancellationToken;

use crate::{
    EditorInfra, Error, FileDirectoryInfra, FileInfoInfra, FileWriterInfra, LogInfra,
    NotificationInfra, PickerSurface,
};

/// Interactive session behind the "Create New File or Folder" command.
///
/// The controller owns the typed value and drives the surface: every change
/// re-renders the single suggestion, accept performs the file-system work and
/// dismissal disposes the surface. Once [`PickerState::Terminal`] is reached
/// every further event is ignored.
pub struct CreationController<I, S> {
    infra: Arc<I>,
    surface: S,
    resolver: PathResolver,
    value: String,
    state: PickerState,
    confine_to_root: bool,
    cancel: CancellationToken,
}

impl<I, S> CreationController<I, S>
where
    I: FileInfoInfra
        + FileDirectoryInfra
        + FileWriterInfra
        + EditorInfra
        + NotificationInfra
        + LogInfra,
    S: PickerSurface,
{
    pub fn new(infra: Arc<I>, surface: S, context: &RootContext) -> Self {
        Self::with_resolver(infra, surface, context.resolver())
    }

    pub fn with_resolver(infra: Arc<I>, surface: S, resolver: PathResolver) -> Self {
        Self {
            infra,
            surface,
            resolver,
            value: String::new(),
            state: PickerState::Empty,
            confine_to_root: false,
            cancel: CancellationToken::new(),
        }
    }

    /// Refuse paths that resolve outside the root directory.
    pub fn confine_to_root(mut self, confine: bool) -> Self {
        self.confine_to_root = confine;
        self
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Token cancelled when the session is dismissed. Cancelling it directly
    /// interrupts an accept that is still running.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Renders the initial suggestion and shows the surface.
    pub async fn show(&mut self) {
        self.update_suggestion().await;
        self.surface.show();
    }

    pub async fn handle(&mut self, event: PickerEvent) {
        match event {
            PickerEvent::ValueChanged(value) => self.change_value(&value).await,
            PickerEvent::Accepted => {
                self.accept().await;
            }
            PickerEvent::Dismissed => self.dismiss(),
        }
    }

    pub async fn change_value(&mut self, input: &str) {
        if self.state.is_terminal() {
            return;
        }

        self.value = input.trim().to_string();
        self.state = if self.value.is_empty() {
            PickerState::Empty
        } else {
            PickerState::Previewing
        };
        self.update_suggestion().await;
    }

    /// Suggestion for the current value. Reads the file system but changes
    /// nothing, so repeated calls on the same state agree.
    pub async fn suggestion(&self) -> SuggestionItem {
        if self.value.is_empty() {
            return SuggestionItem::placeholder(&self.resolver);
        }

        let exists = self.exists(&self.resolver.absolute_path(&self.value)).await;
        SuggestionItem::preview(&self.resolver, &self.value, exists, self.is_outside_root())
    }

    pub async fn accept(&mut self) -> AcceptOutcome {
        if self.state.is_terminal() || self.value.is_empty() {
            return AcceptOutcome::Ignored;
        }

        let relative_path = self.resolver.relative_path(&self.value);
        let full_path = self.resolver.absolute_path(&self.value);

        if self.is_outside_root() {
            self.report(Error::OutsideRoot { path: full_path });
            return AcceptOutcome::Refused;
        }

        let outcome = if self.resolver.is_directory(&self.value) {
            self.create_folder(&full_path, &relative_path).await
        } else {
            self.create_file(&full_path, &relative_path).await
        };

        if outcome == AcceptOutcome::Cancelled {
            self.infra.log("Creation cancelled:", &full_path.display().to_string());
        }
        if outcome.hides_picker() {
            self.hide();
        }
        outcome
    }

    /// Hides the surface, which ends the session.
    pub fn hide(&mut self) {
        self.surface.hide();
        self.dismiss();
    }

    pub fn dismiss(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        self.state = PickerState::Terminal;
        self.cancel.cancel();
        self.surface.dispose();
    }

    async fn create_folder(&self, full_path: &Path, relative_path: &str) -> AcceptOutcome {
        self.infra.log("Creating a folder:", &full_path.display().to_string());

        let created = self
            .step(self.infra.create_dirs(full_path))
            .await
            .map(|result| {
                result.map_err(|cause| Error::DirectoryCreation {
                    path: full_path.to_path_buf(),
                    cause,
                })
            });

        match created {
            None => AcceptOutcome::Cancelled,
            Some(Err(error)) => {
                self.report(error);
                AcceptOutcome::Failed
            }
            Some(Ok(())) => {
                self.infra.show_info(&format!("Folder created: {relative_path}"));
                AcceptOutcome::FolderCreated
            }
        }
    }

    async fn create_file(&self, full_path: &Path, relative_path: &str) -> AcceptOutcome {
        let Some(exists) = self.step(self.exists(full_path)).await else {
            return AcceptOutcome::Cancelled;
        };

        if exists {
            return match self.open(full_path).await {
                None => AcceptOutcome::Cancelled,
                Some(Err(error)) => {
                    self.report(error);
                    AcceptOutcome::Failed
                }
                Some(Ok(())) => {
                    self.infra
                        .show_info(&format!("File already exists: {relative_path}"));
                    AcceptOutcome::FileOpened
                }
            };
        }

        self.infra.log("Creating a file:", &full_path.display().to_string());

        match self.step(self.ensure_file(full_path)).await {
            None => return AcceptOutcome::Cancelled,
            Some(Err(error)) => {
                self.report(error);
                return AcceptOutcome::Failed;
            }
            Some(Ok(())) => {}
        }

        match self.open(full_path).await {
            None => AcceptOutcome::Cancelled,
            Some(Err(error)) => {
                self.report(error);
                AcceptOutcome::Failed
            }
            Some(Ok(())) => AcceptOutcome::FileCreated,
        }
    }

    async fn ensure_file(&self, full_path: &Path) -> Result<(), Error> {
        let to_error =
            |cause: anyhow::Error| Error::FileCreation { path: full_path.to_path_buf(), cause };

        if let Some(parent) = full_path.parent() {
            self.infra.create_dirs(parent).await.map_err(to_error)?;
        }
        self.infra
            .write(full_path, Bytes::new())
            .await
            .map_err(to_error)
    }

    async fn open(&self, full_path: &Path) -> Option<Result<(), Error>> {
        self.step(self.infra.open(full_path)).await.map(|result| {
            result.map_err(|cause| Error::Open { path: full_path.to_path_buf(), cause })
        })
    }

    /// Runs one file-system step unless the session has been dismissed.
    async fn step<T>(&self, future: impl Future<Output = T>) -> Option<T> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => None,
            value = future => Some(value),
        }
    }

    async fn exists(&self, path: &Path) -> bool {
        match self.infra.exists(path).await {
            Ok(exists) => exists,
            Err(error) => {
                tracing::warn!(path = %path.display(), error = %error, "Existence check failed");
                false
            }
        }
    }

    fn is_outside_root(&self) -> bool {
        self.confine_to_root && self.resolver.escapes_root(&self.value)
    }

    fn report(&self, error: Error) {
        let message = error.to_string();
        let detail = error
            .cause()
            .unwrap_or_else(|| error.path().display().to_string());
        self.infra.log(&format!("{message}:"), &detail);
        self.infra.show_error(&message);
    }

    async fn update_suggestion(&mut self) {
        let item = self.suggestion().await;
        self.surface.set_items(vec![item]);
    }
}
