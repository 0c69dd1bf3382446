//! # armdeck Control
//!
//! 控制台逻辑：把用户动作翻译为状态修改与控制服务请求。
//!
//! ## 模块
//!
//! - `console`: [`RobotConsole`]，每个动作一个协调函数
//! - `config`: [`ConsoleConfig`]，TOML 配置文件
//! - `log`: [`CommandLog`]，有界命令日志
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! use armdeck_control::{ConsoleConfig, RobotConsole};
//! use armdeck_types::Direction;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConsoleConfig::load_or_default(ConsoleConfig::default_path()?)?;
//! let mut console = RobotConsole::from_config(&config)?;
//! console.jog_joint(1, Direction::Positive).await?;
//! println!("{}", console.store().joint(1).map(|j| j.angle).unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod config;
mod console;
mod error;
pub mod log;

pub use config::{ConsoleConfig, ControlMode, JogSettings, JogSteps};
pub use console::{Outcome, QUEUED_COMMAND_RESPONSE, QUICK_COMMANDS, RobotConsole};
pub use error::{ConfigError, ControlError};
pub use log::{CommandEntry, CommandLog, CommandStatus};
