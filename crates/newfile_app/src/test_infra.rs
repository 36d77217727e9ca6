use std::collections::{BTreeSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use bytes::Bytes;
use newfile_domain::{Environment, Notice, PickerEvent, SuggestionItem};
use tokio_util::sync::CancellationToken;

use crate::{
    EditorInfra, EnvironmentInfra, FileDirectoryInfra, FileInfoInfra, FileWriterInfra, LogInfra,
    NotificationInfra, PickerEvents, PickerSurface,
};

#[derive(Default)]
struct State {
    dirs: BTreeSet<PathBuf>,
    files: BTreeSet<PathBuf>,
    opened: Vec<PathBuf>,
    notices: Vec<Notice>,
    logs: Vec<(String, String)>,
    fs_calls: usize,
    writes: usize,
    create_dirs_error: Option<String>,
    write_error: Option<String>,
    cancel_on_create_dirs: Option<CancellationToken>,
    create_dirs_delay: Option<Duration>,
}

/// In-memory file system plus recorders for every side effect.
#[derive(Default)]
pub struct MockInfra {
    state: Mutex<State>,
    confine_to_root: bool,
}

impl MockInfra {
    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.lock().dirs.insert(PathBuf::from(path));
        self
    }

    pub fn with_file(self, path: &str) -> Self {
        self.lock().files.insert(PathBuf::from(path));
        self
    }

    pub fn confined(mut self) -> Self {
        self.confine_to_root = true;
        self
    }

    pub fn fail_create_dirs(self, message: &str) -> Self {
        self.lock().create_dirs_error = Some(message.to_string());
        self
    }

    pub fn fail_write(self, message: &str) -> Self {
        self.lock().write_error = Some(message.to_string());
        self
    }

    pub fn cancel_on_create_dirs(&self, token: CancellationToken) {
        self.lock().cancel_on_create_dirs = Some(token);
    }

    pub fn slow_create_dirs(self, delay: Duration) -> Self {
        self.lock().create_dirs_delay = Some(delay);
        self
    }

    pub fn clear_failures(&self) {
        let mut state = self.lock();
        state.create_dirs_error = None;
        state.write_error = None;
    }

    pub fn is_dir(&self, path: &str) -> bool {
        self.lock().dirs.contains(Path::new(path))
    }

    pub fn is_file(&self, path: &str) -> bool {
        self.lock().files.contains(Path::new(path))
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.lock().opened.clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.lock().notices.clone()
    }

    pub fn logs(&self) -> Vec<(String, String)> {
        self.lock().logs.clone()
    }

    pub fn fs_calls(&self) -> usize {
        self.lock().fs_calls
    }

    pub fn writes(&self) -> usize {
        self.lock().writes
    }
}

impl EnvironmentInfra for MockInfra {
    fn get_environment(&self) -> Environment {
        Environment::new(PathBuf::from("/proj"), PathBuf::from("/tmp/logs"))
            .confine_to_root(self.confine_to_root)
    }
}

#[async_trait::async_trait]
impl FileInfoInfra for MockInfra {
    async fn exists(&self, path: &Path) -> anyhow::Result<bool> {
        let mut state = self.lock();
        state.fs_calls += 1;
        Ok(state.dirs.contains(path) || state.files.contains(path))
    }
}

#[async_trait::async_trait]
impl FileDirectoryInfra for MockInfra {
    async fn create_dirs(&self, path: &Path) -> anyhow::Result<()> {
        let delay = {
            let mut state = self.lock();
            state.fs_calls += 1;
            state.create_dirs_delay
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.lock();
        if let Some(token) = &state.cancel_on_create_dirs {
            token.cancel();
        }
        if let Some(message) = &state.create_dirs_error {
            anyhow::bail!("{message}");
        }
        for ancestor in path.ancestors() {
            state.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl FileWriterInfra for MockInfra {
    async fn write(&self, path: &Path, _contents: Bytes) -> anyhow::Result<()> {
        let mut state = self.lock();
        state.fs_calls += 1;
        if let Some(message) = &state.write_error {
            anyhow::bail!("{message}");
        }
        state.writes += 1;
        state.files.insert(path.to_path_buf());
        Ok(())
    }
}

#[async_trait::async_trait]
impl EditorInfra for MockInfra {
    async fn open(&self, path: &Path) -> anyhow::Result<()> {
        self.lock().opened.push(path.to_path_buf());
        Ok(())
    }
}

impl NotificationInfra for MockInfra {
    fn notify(&self, notice: Notice) {
        self.lock().notices.push(notice);
    }
}

impl LogInfra for MockInfra {
    fn log(&self, message: &str, detail: &str) {
        self.lock().logs.push((message.to_string(), detail.to_string()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    SetItems(Vec<SuggestionItem>),
    Show,
    Hide,
    Dispose,
}

/// Surface that records calls.
#[derive(Default)]
pub struct ScriptedSurface {
    pub calls: Vec<SurfaceCall>,
}

impl ScriptedSurface {
    pub fn last_items(&self) -> Vec<SuggestionItem> {
        self.calls
            .iter()
            .rev()
            .find_map(|call| match call {
                SurfaceCall::SetItems(items) => Some(items.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }
}

impl PickerSurface for ScriptedSurface {
    fn set_items(&mut self, items: Vec<SuggestionItem>) {
        self.calls.push(SurfaceCall::SetItems(items));
    }

    fn show(&mut self) {
        self.calls.push(SurfaceCall::Show);
    }

    fn hide(&mut self) {
        self.calls.push(SurfaceCall::Hide);
    }

    fn dispose(&mut self) {
        self.calls.push(SurfaceCall::Dispose);
    }
}

/// What a [`ScriptedEvents`] source does once its events run out.
#[derive(Default)]
enum Ending {
    #[default]
    Close,
    Fail(String),
    Wait,
}

/// Replays a fixed list of events, then closes, fails or waits forever.
#[derive(Default)]
pub struct ScriptedEvents {
    events: VecDeque<PickerEvent>,
    ending: Ending,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = PickerEvent>) -> Self {
        Self { events: events.into_iter().collect(), ending: Ending::Close }
    }

    pub fn then_fail(mut self, message: &str) -> Self {
        self.ending = Ending::Fail(message.to_string());
        self
    }

    pub fn then_wait(mut self) -> Self {
        self.ending = Ending::Wait;
        self
    }
}

#[async_trait::async_trait]
impl PickerEvents for ScriptedEvents {
    async fn next_event(&mut self) -> anyhow::Result<Option<PickerEvent>> {
        if let Some(event) = self.events.pop_front() {
            return Ok(Some(event));
        }
        match &self.ending {
            Ending::Close => Ok(None),
            Ending::Fail(message) => anyhow::bail!("{message}"),
            Ending::Wait => std::future::pending().await,
        }
    }
}
