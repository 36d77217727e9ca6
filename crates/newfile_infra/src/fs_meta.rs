use std::path::Path;

use newfile_app::FileInfoInfra;

#[derive(Debug, Default, Clone, Copy)]
pub struct NewFileFileMetaService;

#[async_trait::async_trait]
impl FileInfoInfra for NewFileFileMetaService {
    async fn exists(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(newfile_fs::NewFileFS::exists(path))
    }
}
