mod input;
mod notice_board;
mod picker;
mod terminal;

pub use input::InputLine;
pub use notice_board::NoticeBoard;
pub use picker::{TerminalInput, TerminalPicker};
pub use terminal::RawModeGuard;
