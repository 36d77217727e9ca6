mod command;
mod controller;
mod error;
mod infra;
#[cfg(test)]
mod test_infra;

pub use command::*;
pub use controller::*;
pub use error::*;
pub use infra::*;
pub mod domain {
    pub use newfile_domain::*;
}
