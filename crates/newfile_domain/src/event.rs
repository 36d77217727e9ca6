/// Input produced by the picker surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The text in the input changed. Carries the full, untrimmed text.
    ValueChanged(String),
    /// The user pressed Enter.
    Accepted,
    /// The picker was hidden, by the user or after a successful accept.
    Dismissed,
}

/// Lifecycle of a single picker session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum PickerState {
    /// Nothing typed yet; the placeholder is shown.
    #[default]
    Empty,
    /// A path has been typed and is previewed.
    Previewing,
    /// The surface has been disposed. No further events are handled.
    Terminal,
}

impl PickerState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }
}

/// What an accept ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptOutcome {
    /// Nothing typed, or the session is already closed.
    Ignored,
    FolderCreated,
    FileCreated,
    /// The file already existed and was opened instead.
    FileOpened,
    /// Creation failed; the picker stays open for another attempt.
    Failed,
    /// The path points outside the workspace and confinement is on.
    Refused,
    /// The session was dismissed while the accept was running.
    Cancelled,
}

impl AcceptOutcome {
    /// Whether the picker should close after this outcome.
    pub fn hides_picker(&self) -> bool {
        matches!(self, Self::FolderCreated | Self::FileCreated)
    }
}
