use std::path::Path;

use bytes::Bytes;
use newfile_domain::{Environment, Notice, PickerEvent, SuggestionItem};

/// Infrastructure trait for accessing the resolved runtime configuration.
pub trait EnvironmentInfra: Send + Sync {
    fn get_environment(&self) -> Environment;
}

#[async_trait::async_trait]
pub trait FileInfoInfra: Send + Sync {
    async fn exists(&self, path: &Path) -> anyhow::Result<bool>;
}

#[async_trait::async_trait]
pub trait FileDirectoryInfra: Send + Sync {
    /// Creates the directory and all of its missing parents.
    async fn create_dirs(&self, path: &Path) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
pub trait FileWriterInfra: Send + Sync {
    /// Writes the content of a file at the specified path. Parent directories
    /// must already exist.
    async fn write(&self, path: &Path, contents: Bytes) -> anyhow::Result<()>;
}

/// Opens documents in the host editor.
#[async_trait::async_trait]
pub trait EditorInfra: Send + Sync {
    async fn open(&self, path: &Path) -> anyhow::Result<()>;
}

/// Fire-and-forget user notifications.
pub trait NotificationInfra: Send + Sync {
    fn notify(&self, notice: Notice);

    fn show_info(&self, message: &str) {
        self.notify(Notice::info(message))
    }

    fn show_warning(&self, message: &str) {
        self.notify(Notice::warning(message))
    }

    fn show_error(&self, message: &str) {
        self.notify(Notice::error(message))
    }
}

/// Diagnostic log sink handed to the picker instead of a global logger.
pub trait LogInfra: Send + Sync {
    fn log(&self, message: &str, detail: &str);
}

/// The widget that renders the input box and its single suggestion.
pub trait PickerSurface {
    /// Replaces the rendered suggestion list. The picker always passes
    /// exactly one item.
    fn set_items(&mut self, items: Vec<SuggestionItem>);
    fn show(&mut self);
    fn hide(&mut self);
    /// Releases the widget. Must be safe to call more than once.
    fn dispose(&mut self);
}

/// Source of input events for a picker surface.
///
/// Kept apart from [`PickerSurface`] so that input can still be read while an
/// accept is being processed.
#[async_trait::async_trait]
pub trait PickerEvents: Send {
    /// Waits for the next event. `None` means the input closed.
    ///
    /// Must be cancel safe: dropping the future before it completes may not
    /// lose an event.
    async fn next_event(&mut self) -> anyhow::Result<Option<PickerEvent>>;
}
