//! 数据模型错误类型

use thiserror::Error;

/// 数据模型层错误
///
/// 只在构造或解析数据时出现；对已有状态的修改永远不会失败。
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// 关节限位无效（min > max 或非有限值）
    #[error("Invalid limits for joint {joint}: min {min} > max {max}")]
    InvalidLimits {
        /// 关节 ID
        joint: u32,
        /// 下限（度）
        min: f64,
        /// 上限（度）
        max: f64,
    },

    /// 无法解析的数值输入
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// 无法识别的方向（只接受 `+` / `-`）
    #[error("Unknown direction: {0:?} (expected '+' or '-')")]
    UnknownDirection(String),

    /// 无法识别的轴名称
    #[error("Unknown axis: {0:?}")]
    UnknownAxis(String),

    /// 机器人描述文件中没有任何关节
    #[error("Robot descriptor {file_name:?} contains no joints")]
    EmptyDescriptor {
        /// 上传的文件名
        file_name: String,
    },
}
