use std::io::Write;
use std::sync::Mutex;

use colored::Colorize;
use newfile_app::NotificationInfra;
use newfile_domain::{Notice, NoticeLevel};

/// Collects notifications raised while the picker is open.
///
/// The picker renders the latest notice under the suggestion; whatever is
/// still pending when the session ends is printed by [`NoticeBoard::flush`].
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<Notice> {
        self.lock().last().cloned()
    }

    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.lock())
    }

    /// Writes and clears all pending notices, one per line.
    pub fn flush(&self, mut out: impl Write) -> std::io::Result<()> {
        for notice in self.drain() {
            writeln!(out, "{}", Self::format(&notice))?;
        }
        out.flush()
    }

    pub fn format(notice: &Notice) -> String {
        match notice.level {
            NoticeLevel::Info => format!("{} {}", "●".cyan(), notice.message),
            NoticeLevel::Warning => format!("{} {}", "⚠".yellow(), notice.message.yellow()),
            NoticeLevel::Error => format!("{} {}", "✗".red(), notice.message.red()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notice>> {
        self.notices.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl NotificationInfra for NoticeBoard {
    fn notify(&self, notice: Notice) {
        tracing::debug!(level = %notice.level, message = %notice.message, "Notice");
        self.lock().push(notice);
    }
}
