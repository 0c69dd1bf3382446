//! # armdeck Types
//!
//! 机械臂控制台的共享数据模型（无网络、无渲染依赖）
//!
//! ## 模块
//!
//! - `units`: `Deg` / `Rad` 强类型角度
//! - `joint`: 关节、关节限位与部分更新
//! - `config`: 机器人配置与末端位置
//! - `jog`: 点动方向与轴
//! - `input`: 文本数值输入校验
//! - `descriptor`: URDF 描述文件导入
//!
//! ## Feature Flags
//!
//! - `serde` - 为数据类型派生 `Serialize` / `Deserialize`（控制服务 JSON 与 TOML 配置需要）

pub mod config;
pub mod descriptor;
mod error;
pub mod input;
pub mod jog;
pub mod joint;
pub mod units;

// 重新导出常用类型
pub use config::{DEFAULT_CONFIG_ID, Position, RobotConfig};
pub use descriptor::{parse_urdf, parse_urdf_with_id};
pub use error::ModelError;
pub use input::parse_number;
pub use jog::{Direction, RotationAxis, TcpJog, TranslationAxis};
pub use joint::{Joint, JointId, JointPatch};
pub use units::{Deg, Rad};
