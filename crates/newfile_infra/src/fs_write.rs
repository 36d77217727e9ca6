use std::path::Path;

use bytes::Bytes;
use newfile_app::FileWriterInfra;

/// Low-level file write service. Callers create parent directories first.
#[derive(Debug, Default, Clone, Copy)]
pub struct NewFileFileWriteService;

#[async_trait::async_trait]
impl FileWriterInfra for NewFileFileWriteService {
    async fn write(&self, path: &Path, contents: Bytes) -> anyhow::Result<()> {
        newfile_fs::NewFileFS::write(path, contents).await
    }
}
