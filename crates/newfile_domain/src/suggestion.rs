use derive_more::Display;
use derive_setters::Setters;

use crate::PathResolver;

/// Icon rendered next to the suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum IconKind {
    None,
    File,
    Directory,
}

/// Secondary line of the suggestion explaining what Enter will do.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SuggestionDetail {
    #[display("Type a path to a file or a folder (append `{_0}` to create a folder)")]
    Hint(char),
    #[display("Folder already exists")]
    FolderExists,
    #[display("Press Enter to create a new folder")]
    NewFolder,
    #[display("File already exists, press Enter to open")]
    FileExists,
    #[display("Press Enter to create a new file")]
    NewFile,
    #[display("Path is outside the workspace root")]
    OutsideRoot,
}

impl SuggestionDetail {
    pub fn for_target(is_directory: bool, exists: bool) -> Self {
        match (is_directory, exists) {
            (true, true) => Self::FolderExists,
            (true, false) => Self::NewFolder,
            (false, true) => Self::FileExists,
            (false, false) => Self::NewFile,
        }
    }
}

/// The single item the picker shows under the input.
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
#[setters(into)]
pub struct SuggestionItem {
    pub icon: IconKind,
    pub label: String,
    pub detail: String,
}

impl SuggestionItem {
    /// Item shown before anything has been typed.
    pub fn placeholder(resolver: &PathResolver) -> Self {
        Self {
            icon: IconKind::None,
            label: resolver.placeholder_label(),
            detail: SuggestionDetail::Hint(resolver.separator()).to_string(),
        }
    }

    /// Item previewing what accepting `value` would do.
    ///
    /// `exists` reports whether the absolute target is already on disk and
    /// `outside_root` whether creation would be refused for leaving the root.
    pub fn preview(resolver: &PathResolver, value: &str, exists: bool, outside_root: bool) -> Self {
        let is_directory = resolver.is_directory(value);
        let detail = if outside_root {
            SuggestionDetail::OutsideRoot
        } else {
            SuggestionDetail::for_target(is_directory, exists)
        };

        Self {
            icon: if is_directory { IconKind::Directory } else { IconKind::File },
            label: resolver.relative_path(value),
            detail: detail.to_string(),
        }
    }
}
