use std::path::{Path, PathBuf};

/// Resolves `path` against `cwd` and canonicalizes it, or only its parent when
/// the path does not exist yet.
pub fn absolute_path(cwd: &Path, path: &Path) -> PathBuf {
    let joined = cwd.join(path);
    if let Ok(canonical) = joined.canonicalize() {
        return canonical;
    }

    if let (Some(parent), Some(name)) = (joined.parent(), joined.file_name())
        && let Ok(parent) = parent.canonicalize()
    {
        return parent.join(name);
    }
    joined
}
