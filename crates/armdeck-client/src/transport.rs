//! 传输层抽象
//!
//! 命令客户端只依赖 [`Transport`]：生产环境使用 reqwest 实现的
//! [`HttpTransport`](crate::HttpTransport)，测试使用内存中的 `MockTransport`。

use crate::error::TransportError;
use serde_json::Value;
use std::future::Future;

/// 原始 HTTP 响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP 状态码
    pub status: u16,
    /// 响应体文本
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 状态码是否为 2xx
    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 发送 JSON `POST` 请求的传输层
///
/// 实现方不需要解释状态码；非 2xx 的判断由客户端完成。
/// 只有请求无法完成（连接失败、超时）时才返回 `Err`。
pub trait Transport: Send + Sync {
    fn post(
        &self,
        url: &str,
        body: Option<&Value>,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}
