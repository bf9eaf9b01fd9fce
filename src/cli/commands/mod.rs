pub mod check;
mod command_result;
pub mod context;
pub mod init;
pub mod shell;
pub mod translate;

pub use command_result::*;
