use std::path::{Path, PathBuf};

use clap::Parser;

use crate::absolute_path;

/// Create a new file or folder inside a workspace.
///
/// Type a path relative to the directory of the active file. End it with a
/// path separator to create a folder, start it with one to resolve it from
/// the workspace root.
#[derive(Parser, Debug)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Workspace folder. Repeat to register several; the first one is used
    /// when no active file is given. Defaults to the current directory.
    #[arg(long, short = 'C')]
    pub directory: Vec<PathBuf>,

    /// File currently open in the editor. Typed paths are resolved from its
    /// directory.
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Enable verbose logging output.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn workspace_folders(&self, cwd: &Path) -> Vec<PathBuf> {
        if self.directory.is_empty() {
            return vec![absolute_path(cwd, Path::new("."))];
        }
        self.directory
            .iter()
            .map(|directory| absolute_path(cwd, directory))
            .collect()
    }

    pub fn active_document(&self, cwd: &Path) -> Option<PathBuf> {
        self.file.as_deref().map(|file| absolute_path(cwd, file))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let fixture = Cli::try_parse_from(["newfile"]).unwrap();

        assert!(fixture.directory.is_empty());
        assert_eq!(fixture.file, None);
        assert!(!fixture.verbose);
    }

    #[test]
    fn test_repeated_directories_and_file() {
        let fixture = Cli::try_parse_from([
            "newfile",
            "-C",
            "/a",
            "--directory",
            "/b",
            "-f",
            "/a/x.ts",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(fixture.directory, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
        assert_eq!(fixture.file, Some(PathBuf::from("/a/x.ts")));
        assert!(fixture.verbose);
    }

    #[test]
    fn test_workspace_folders_default_to_cwd() {
        let temp_dir = tempfile::tempdir().unwrap();
        let fixture = Cli::try_parse_from(["newfile"]).unwrap();

        let actual = fixture.workspace_folders(temp_dir.path());
        let expected = vec![temp_dir.path().canonicalize().unwrap()];
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_active_document_is_resolved_against_cwd() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp_dir.path().join("src")).unwrap();
        let fixture = Cli::try_parse_from(["newfile", "-f", "src/new.ts"]).unwrap();

        let actual = fixture.active_document(temp_dir.path());
        let expected = Some(temp_dir.path().canonicalize().unwrap().join("src").join("new.ts"));
        assert_eq!(actual, expected);
    }
}
