//! 命令定义和实现

pub mod config;
pub mod connect;
pub mod import;
pub mod jog;
pub mod program;
pub mod stop;

pub use config::ConfigCommand;
pub use connect::ConnectCommand;
pub use import::ImportCommand;
pub use jog::{JogCommand, RotateCommand, TranslateCommand};
pub use program::ProgramCommand;
