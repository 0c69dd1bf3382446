//! armdeck SDK - 机械臂控制台 Rust SDK
//!
//! # 架构设计
//!
//! 从底层到高层：
//!
//! - **数据模型** (`types`): 关节、配置、角度单位、点动方向
//! - **状态存储** (`store`): 当前配置、关节角度、末端位置、会话状态
//! - **命令客户端** (`client`): 控制服务 REST 接口，无状态
//! - **控制台** (`control`): 用户动作 → 状态修改 + 远端请求
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use armdeck_sdk::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! armdeck_sdk::init_logger();
//!
//! let config = ConsoleConfig::default_config();
//! let mut console = RobotConsole::from_config(&config)?;
//! console.jog_joint(1, Direction::Positive).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - `http`（默认）: reqwest 传输层
//! - `mock`: 内存模拟传输层 `MockTransport`
//! - `serde`: `RobotStore` 的序列化支持

mod logging;
pub mod prelude;

pub use armdeck_client as client;
pub use armdeck_control as control;
pub use armdeck_store as store;
pub use armdeck_types as types;

pub use logging::init_logger;

// --- 常用类型 ---

pub use armdeck_client::{ClientConfig, ClientError, CommandClient, Endpoint, Transport};
pub use armdeck_control::{
    CommandLog, ConfigError, ConsoleConfig, ControlError, ControlMode, Outcome, RobotConsole,
};
pub use armdeck_store::{RobotStore, StoreBuilder};
pub use armdeck_types::{
    Deg, Direction, Joint, JointId, JointPatch, ModelError, Position, Rad, RobotConfig,
    RotationAxis, TcpJog, TranslationAxis,
};

#[cfg(feature = "http")]
pub use armdeck_client::HttpTransport;
#[cfg(feature = "mock")]
pub use armdeck_client::{MockReply, MockTransport};
