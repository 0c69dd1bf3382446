//! Prelude - 常用类型的便捷导入
//!
//! ```rust
//! use armdeck_sdk::prelude::*;
//! ```

// 控制台（推荐入口）
pub use crate::control::{ConsoleConfig, ControlMode, Outcome, RobotConsole};

// 状态与数据模型
pub use crate::store::{RobotStore, StoreBuilder};
pub use crate::types::{
    Deg, Direction, Joint, JointId, JointPatch, Position, Rad, RobotConfig, RotationAxis, TcpJog,
    TranslationAxis,
};

// 命令客户端
pub use crate::client::{ClientConfig, CommandClient, Transport};

// 错误类型
pub use crate::client::ClientError;
pub use crate::control::{ConfigError, ControlError};
pub use crate::types::ModelError;
