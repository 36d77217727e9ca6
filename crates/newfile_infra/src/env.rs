use std::path::{Path, PathBuf};
use std::str::FromStr;

use newfile_app::EnvironmentInfra;
use newfile_domain::Environment;
use newfile_fs::NewFileFS;

#[derive(Clone)]
pub struct NewFileEnvironmentInfra {
    cwd: PathBuf,
}

impl NewFileEnvironmentInfra {
    /// Creates the environment for `cwd`, loading any `.env` files on the way
    /// from the filesystem root down to it.
    pub fn new(cwd: PathBuf) -> Self {
        Self::dot_env(&cwd);
        Self { cwd }
    }

    fn get(&self) -> Environment {
        let log_dir = parse_env::<String>("NEWFILE_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_log_dir);

        Environment {
            cwd: self.cwd.clone(),
            editor: parse_env::<String>("NEWFILE_EDITOR")
                .filter(|editor| !editor.trim().is_empty()),
            confine_to_root: parse_env::<bool>("NEWFILE_CONFINE_TO_ROOT").unwrap_or(false),
            log_dir,
            log_filter: parse_env::<String>("NEWFILE_LOG"),
        }
    }

    /// Load all `.env` files with priority to lower (closer) files.
    fn dot_env(cwd: &Path) -> Option<()> {
        let mut paths = vec![];
        let mut current = PathBuf::new();

        for component in cwd.components() {
            current.push(component);
            paths.push(current.clone());
        }

        paths.reverse();

        for path in paths {
            let env_file = path.join(".env");
            if NewFileFS::is_file(&env_file) {
                dotenvy::from_path(&env_file).ok();
            }
        }

        Some(())
    }
}

impl EnvironmentInfra for NewFileEnvironmentInfra {
    fn get_environment(&self) -> Environment {
        self.get()
    }
}

fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".newfile"))
        .unwrap_or(PathBuf::from(".").join(".newfile"))
        .join("logs")
}

trait FromEnvStr: Sized {
    fn from_env_str(s: &str) -> Option<Self>;
}

/// "true", "1" and "yes" (case-insensitive) are true; anything else is false.
impl FromEnvStr for bool {
    fn from_env_str(s: &str) -> Option<Self> {
        Some(matches!(s.to_lowercase().as_str(), "true" | "1" | "yes"))
    }
}

impl FromEnvStr for String {
    fn from_env_str(s: &str) -> Option<Self> {
        String::from_str(s).ok()
    }
}

fn parse_env<T: FromEnvStr>(name: &str) -> Option<T> {
    std::env::var(name)
        .ok()
        .and_then(|val| T::from_env_str(&val))
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use tempfile::{TempDir, tempdir};

    use super::*;

    fn setup_envs(structure: Vec<(&str, &str)>) -> (TempDir, PathBuf) {
        let root = tempdir().unwrap();
        let root_path = root.path().to_path_buf();

        for (rel_path, content) in &structure {
            let dir = root_path.join(rel_path);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(".env"), content).unwrap();
        }

        let deepest_path = root_path.join(structure[0].0);
        (root, deepest_path)
    }

    fn clean_env_vars() {
        for var in ["NEWFILE_EDITOR", "NEWFILE_CONFINE_TO_ROOT", "NEWFILE_LOG_DIR", "NEWFILE_LOG"] {
            unsafe {
                env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clean_env_vars();

        let actual = NewFileEnvironmentInfra::new(PathBuf::from("/proj")).get_environment();

        assert_eq!(actual.cwd, PathBuf::from("/proj"));
        assert_eq!(actual.editor, None);
        assert!(!actual.confine_to_root);
        assert_eq!(actual.log_filter, None);
        assert!(actual.log_dir.ends_with(".newfile/logs"));
    }

    #[test]
    #[serial]
    fn test_overrides_from_environment() {
        clean_env_vars();
        unsafe {
            env::set_var("NEWFILE_EDITOR", "code --reuse-window");
            env::set_var("NEWFILE_CONFINE_TO_ROOT", "YES");
            env::set_var("NEWFILE_LOG_DIR", "/var/log/newfile");
            env::set_var("NEWFILE_LOG", "debug");
        }

        let actual = NewFileEnvironmentInfra::new(PathBuf::from("/proj")).get_environment();
        clean_env_vars();

        assert_eq!(actual.editor, Some("code --reuse-window".to_string()));
        assert!(actual.confine_to_root);
        assert_eq!(actual.log_dir, PathBuf::from("/var/log/newfile"));
        assert_eq!(actual.log_filter, Some("debug".to_string()));
    }

    #[test]
    #[serial]
    fn test_blank_editor_is_ignored() {
        clean_env_vars();
        unsafe {
            env::set_var("NEWFILE_EDITOR", "  ");
        }

        let actual = NewFileEnvironmentInfra::new(PathBuf::from("/proj")).get_environment();
        clean_env_vars();

        assert_eq!(actual.editor, None);
    }

    #[test]
    #[serial]
    fn test_dot_env_closer_files_win() {
        clean_env_vars();
        let (_root, cwd) = setup_envs(vec![
            ("a/b", "NEWFILE_EDITOR=subl"),
            ("a", "NEWFILE_EDITOR=code\nNEWFILE_CONFINE_TO_ROOT=1"),
        ]);

        let actual = NewFileEnvironmentInfra::new(cwd).get_environment();
        clean_env_vars();

        assert_eq!(actual.editor, Some("subl".to_string()));
        assert!(actual.confine_to_root);
    }
}
