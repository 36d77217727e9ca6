mod env;
mod event;
mod notice;
mod path_resolver;
mod suggestion;
mod workspace;

pub use env::*;
pub use event::*;
pub use notice::*;
pub use path_resolver::*;
pub use suggestion::*;
pub use workspace::*;
