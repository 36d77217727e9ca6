use std::path::Path;

use newfile_app::FileDirectoryInfra;

#[derive(Debug, Default, Clone, Copy)]
pub struct NewFileCreateDirsService;

#[async_trait::async_trait]
impl FileDirectoryInfra for NewFileCreateDirsService {
    async fn create_dirs(&self, path: &Path) -> anyhow::Result<()> {
        newfile_fs::NewFileFS::create_dir_all(path).await
    }
}
