//! 控制台错误类型定义

use armdeck_client::ClientError;
use armdeck_types::{JointId, ModelError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 控制台操作错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControlError {
    /// 远端调用失败（非 2xx 或网络错误）
    #[error(transparent)]
    Client(#[from] ClientError),

    /// 输入或描述文件无效
    #[error(transparent)]
    Model(#[from] ModelError),

    /// 没有加载任何机器人配置
    #[error("No robot configuration loaded")]
    NoConfig,

    /// 当前配置中没有该关节
    #[error("Joint {0} not found in current configuration")]
    UnknownJoint(JointId),

    /// 关节未使能
    #[error("Joint {0} is disabled")]
    JointDisabled(JointId),

    /// 可选列表中没有该配置
    #[error("Unknown robot configuration: {0:?}")]
    UnknownConfig(String),

    /// 步长必须是有限正数
    #[error("Invalid step {0}: must be a finite positive number")]
    InvalidStep(f64),

    /// 目标位置包含非有限值
    #[error("Invalid target position")]
    InvalidPosition,

    #[error("Program name must not be empty")]
    EmptyProgramName,

    #[error("Command must not be empty")]
    EmptyCommand,

    /// 控制服务没有对应接口
    #[error("{0} is not supported by the control service")]
    Unsupported(&'static str),

    /// 控制台配置未通过校验
    #[error("Invalid console config: {0}")]
    InvalidConfig(String),
}

/// 配置文件错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 读写失败
    #[error("Config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// TOML 解析失败
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// TOML 序列化失败
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// 配置内容无效
    #[error("Invalid config: {0}")]
    Invalid(String),

    /// 无法确定用户配置目录
    #[error("Cannot determine the user config directory")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;
    use armdeck_client::Endpoint;

    #[test]
    fn test_control_error_display() {
        assert_eq!(
            ControlError::JointDisabled(3).to_string(),
            "Joint 3 is disabled"
        );

        // 客户端错误原样透传
        let err: ControlError = ClientError::Status {
            endpoint: Endpoint::EmergencyStop,
            status: 500,
        }
        .into();
        assert_eq!(err.to_string(), "Emergency stop failed: HTTP 500");
    }
}
