//! 客户端错误类型定义

use crate::endpoint::Endpoint;
use thiserror::Error;

/// 传输层错误（网络不可达、连接被拒绝、超时等）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for TransportError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for TransportError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// 命令客户端错误
///
/// 远端调用失败只有两类来源：HTTP 状态码非 2xx，或请求本身失败。
/// 返回 2xx 且 `success == false` 不属于错误。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// HTTP 状态码非 2xx
    #[error("{endpoint} failed: HTTP {status}")]
    Status {
        /// 请求的接口
        endpoint: Endpoint,
        /// HTTP 状态码
        status: u16,
    },

    /// 网络层失败
    #[error("{endpoint} failed: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: TransportError,
    },

    /// 2xx 响应中没有布尔类型的 `success` 字段
    #[error("{endpoint} returned an invalid response: {reason}")]
    InvalidResponse { endpoint: Endpoint, reason: String },

    /// 请求体序列化失败
    #[error("Failed to encode request for {endpoint}: {reason}")]
    Encode { endpoint: Endpoint, reason: String },

    /// HTTP 客户端构建失败
    #[error("Failed to build HTTP client: {0}")]
    Build(String),
}

impl ClientError {
    /// 出错的接口（构建错误没有接口）
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            ClientError::Status { endpoint, .. }
            | ClientError::Transport { endpoint, .. }
            | ClientError::InvalidResponse { endpoint, .. }
            | ClientError::Encode { endpoint, .. } => Some(*endpoint),
            ClientError::Build(_) => None,
        }
    }

    /// HTTP 状态码（仅 `Status` 变体）
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
