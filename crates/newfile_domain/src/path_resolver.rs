use std::path::{MAIN_SEPARATOR, PathBuf};

/// Maps text typed into the picker onto paths inside a workspace.
///
/// The typed value follows two conventions:
/// - a trailing separator (`components/`) requests a folder
/// - a leading separator (`/shared/icon.ts`) is resolved against the root
///   instead of the relative base
///
/// Every method is total: empty or malformed input produces a degenerate path
/// rather than an error. Nothing here touches the file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    root: String,
    relative_base: String,
    separator: char,
}

impl PathResolver {
    pub fn new(root: impl Into<String>, relative_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            relative_base: relative_base.into(),
            separator: MAIN_SEPARATOR,
        }
    }

    /// Overrides the platform separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn relative_base(&self) -> &str {
        &self.relative_base
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Value ends with a separator, i.e. the user asked for a folder.
    pub fn is_directory(&self, value: &str) -> bool {
        value.ends_with(self.separator)
    }

    /// Value starts with a separator, i.e. it is relative to the root.
    pub fn is_root_absolute(&self, value: &str) -> bool {
        value.starts_with(self.separator)
    }

    /// Base directory the value is resolved against.
    pub fn effective_base(&self, value: &str) -> &str {
        if self.is_root_absolute(value) {
            ""
        } else {
            &self.relative_base
        }
    }

    /// Absolute path of the entry the value points at.
    pub fn absolute_path(&self, value: &str) -> PathBuf {
        PathBuf::from(self.join_rooted(&[&self.root, self.effective_base(value), value]))
    }

    /// Path of the entry relative to the root, without a leading separator.
    pub fn relative_path(&self, value: &str) -> String {
        let joined = self.join(&[self.effective_base(value), value]);
        match joined.strip_prefix(self.separator) {
            Some(stripped) => stripped.to_string(),
            None => joined,
        }
    }

    /// Label shown while nothing has been typed yet.
    pub fn placeholder_label(&self) -> String {
        self.join(&[&self.relative_base, "…"])
    }

    /// Whether the value resolves to a path outside the root directory.
    pub fn escapes_root(&self, value: &str) -> bool {
        let root = self.join_rooted(&[&self.root]);
        let target = self.join_rooted(&[&self.root, self.effective_base(value), value]);
        if target == root {
            return false;
        }
        let prefix = if root.ends_with(self.separator) {
            root
        } else {
            format!("{root}{}", self.separator)
        };
        !target.starts_with(&prefix)
    }

    fn join(&self, parts: &[&str]) -> String {
        self.normalize(&self.concat(parts))
    }

    /// Like [`Self::join`], but a leading drive (`C:`) or UNC share
    /// (`\\server\share`) is kept as an anchor that `..` cannot remove.
    fn join_rooted(&self, parts: &[&str]) -> String {
        let path = self.concat(parts);
        match self.split_prefix(&path) {
            Some((prefix, rest, true)) => {
                format!("{prefix}{}", self.normalize(&format!("{}{rest}", self.separator)))
            }
            Some((prefix, rest, false)) => format!("{prefix}{}", self.normalize(rest)),
            None => self.normalize(&path),
        }
    }

    fn concat(&self, parts: &[&str]) -> String {
        parts
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(&self.separator.to_string())
    }

    /// Splits a Windows path prefix off `path`. The flag is set for UNC
    /// shares, which are always rooted.
    fn split_prefix<'a>(&self, path: &'a str) -> Option<(&'a str, &'a str, bool)> {
        if self.separator != '\\' {
            return None;
        }

        if let Some(unc) = path.strip_prefix(r"\\") {
            let mut parts = unc.splitn(3, self.separator);
            if let (Some(server), Some(share)) = (parts.next(), parts.next())
                && !server.is_empty()
                && !share.is_empty()
            {
                let end = 2 + server.len() + 1 + share.len();
                return Some((&path[..end], &path[end..], true));
            }
        }

        let bytes = path.as_bytes();
        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            return Some((&path[..2], &path[2..], false));
        }
        None
    }

    /// Collapses repeated separators and resolves `.` and `..` segments.
    /// Trailing separators are dropped. `..` never climbs above an absolute
    /// root and is kept verbatim at the front of a relative path.
    fn normalize(&self, path: &str) -> String {
        let absolute = path.starts_with(self.separator);
        let mut segments: Vec<&str> = Vec::new();

        for segment in path.split(self.separator) {
            match segment {
                "" | "." => {}
                ".." => match segments.last() {
                    Some(&last) if last != ".." => {
                        segments.pop();
                    }
                    _ if absolute => {}
                    _ => segments.push(".."),
                },
                other => segments.push(other),
            }
        }

        let body = segments.join(&self.separator.to_string());
        match (absolute, body.is_empty()) {
            (true, _) => format!("{}{body}", self.separator),
            (false, true) => ".".to_string(),
            (false, false) => body,
        }
    }
}
