use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use newfile_app::{
    EditorInfra, EnvironmentInfra, FileDirectoryInfra, FileInfoInfra, FileWriterInfra, LogInfra,
    NotificationInfra,
};
use newfile_domain::{Environment, Notice};

use crate::editor::NewFileEditorService;
use crate::env::NewFileEnvironmentInfra;
use crate::fs_create_dirs::NewFileCreateDirsService;
use crate::fs_meta::NewFileFileMetaService;
use crate::fs_write::NewFileFileWriteService;
use crate::logger::TracingLogger;

/// Native infrastructure for the picker. Notifications are rendered by the
/// front end, so the notifier is supplied by the caller.
pub struct NewFileInfra<N> {
    environment_service: Arc<NewFileEnvironmentInfra>,
    file_meta_service: Arc<NewFileFileMetaService>,
    create_dirs_service: Arc<NewFileCreateDirsService>,
    file_write_service: Arc<NewFileFileWriteService>,
    editor_service: Arc<NewFileEditorService>,
    logger: Arc<TracingLogger>,
    notifier: Arc<N>,
}

impl<N> Clone for NewFileInfra<N> {
    fn clone(&self) -> Self {
        Self {
            environment_service: self.environment_service.clone(),
            file_meta_service: self.file_meta_service.clone(),
            create_dirs_service: self.create_dirs_service.clone(),
            file_write_service: self.file_write_service.clone(),
            editor_service: self.editor_service.clone(),
            logger: self.logger.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<N: NotificationInfra> NewFileInfra<N> {
    pub fn new(cwd: PathBuf, notifier: Arc<N>) -> Self {
        let environment_service = Arc::new(NewFileEnvironmentInfra::new(cwd));
        let env = environment_service.get_environment();

        Self {
            environment_service,
            file_meta_service: Arc::new(NewFileFileMetaService),
            create_dirs_service: Arc::new(NewFileCreateDirsService),
            file_write_service: Arc::new(NewFileFileWriteService),
            editor_service: Arc::new(NewFileEditorService::new(env.editor)),
            logger: Arc::new(TracingLogger),
            notifier,
        }
    }
}

impl<N: NotificationInfra> EnvironmentInfra for NewFileInfra<N> {
    fn get_environment(&self) -> Environment {
        self.environment_service.get_environment()
    }
}

#[async_trait::async_trait]
impl<N: NotificationInfra> FileInfoInfra for NewFileInfra<N> {
    async fn exists(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_meta_service.exists(path).await
    }
}

#[async_trait::async_trait]
impl<N: NotificationInfra> FileDirectoryInfra for NewFileInfra<N> {
    async fn create_dirs(&self, path: &Path) -> anyhow::Result<()> {
        self.create_dirs_service.create_dirs(path).await
    }
}

#[async_trait::async_trait]
impl<N: NotificationInfra> FileWriterInfra for NewFileInfra<N> {
    async fn write(&self, path: &Path, contents: Bytes) -> anyhow::Result<()> {
        self.file_write_service.write(path, contents).await
    }
}

#[async_trait::async_trait]
impl<N: NotificationInfra> EditorInfra for NewFileInfra<N> {
    async fn open(&self, path: &Path) -> anyhow::Result<()> {
        self.editor_service.open(path).await
    }
}

impl<N: NotificationInfra> NotificationInfra for NewFileInfra<N> {
    fn notify(&self, notice: Notice) {
        self.notifier.notify(notice)
    }
}

impl<N: NotificationInfra> LogInfra for NewFileInfra<N> {
    fn log(&self, message: &str, detail: &str) {
        self.logger.log(message, detail)
    }
}
