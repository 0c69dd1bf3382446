//! 命令客户端
//!
//! 无状态：每个操作发送一次 `POST`，把响应解释为 `Result<bool, ClientError>`。
//!
//! - 非 2xx 状态码 → `ClientError::Status`
//! - 网络失败 → `ClientError::Transport`
//! - 2xx → 响应体中的 `success` 字段（`false` 不是错误）
//!
//! 客户端不读写状态存储，调用方自行决定如何使用结果。

use crate::endpoint::Endpoint;
use crate::error::ClientError;
use crate::request::{
    ApiResponse, ConnectRequest, JointMoveRequest, RotateRequest, StartProgramRequest,
    TranslateRequest,
};
use crate::transport::Transport;
use armdeck_types::{Direction, JointId, RotationAxis, TranslationAxis};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

#[cfg(feature = "http")]
use crate::http::HttpTransport;

/// 默认 API 根地址
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";

/// 客户端配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API 根地址（例如 `http://localhost:3001/api`）
    pub base_url: String,
    /// 请求超时（`None` 表示不限制）
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// 指定根地址
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// 命令客户端
#[derive(Debug, Clone)]
pub struct CommandClient<T: Transport> {
    base_url: String,
    transport: T,
}

/// 使用 reqwest 传输层的客户端
#[cfg(feature = "http")]
pub type HttpCommandClient = CommandClient<HttpTransport>;

#[cfg(feature = "http")]
impl CommandClient<HttpTransport> {
    /// 按配置创建 HTTP 客户端
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport =
            HttpTransport::new(config.timeout).map_err(|e| ClientError::Build(e.message))?;
        Ok(Self::with_transport(config.base_url, transport))
    }
}

impl<T: Transport> CommandClient<T> {
    /// 使用自定义传输层
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 接口完整 URL
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    // ==================== 操作 ====================

    /// 请求控制服务连接到机器人
    pub async fn connect(&self, host: &str, port: u16) -> Result<bool, ClientError> {
        let body = encode(
            Endpoint::Connect,
            &ConnectRequest {
                host: host.to_string(),
                port,
            },
        )?;
        self.call(Endpoint::Connect, Some(body)).await
    }

    /// TCP 沿单轴平移
    pub async fn translate_tcp(
        &self,
        axis: TranslationAxis,
        value: f64,
        direction: Direction,
    ) -> Result<bool, ClientError> {
        let body = encode(
            Endpoint::TranslateTcp,
            &TranslateRequest {
                axis,
                value,
                direction,
            },
        )?;
        self.call(Endpoint::TranslateTcp, Some(body)).await
    }

    /// TCP 绕单轴旋转
    pub async fn rotate_tcp(
        &self,
        axis: RotationAxis,
        value: f64,
        direction: Direction,
    ) -> Result<bool, ClientError> {
        let body = encode(
            Endpoint::RotateTcp,
            &RotateRequest {
                axis,
                value,
                direction,
            },
        )?;
        self.call(Endpoint::RotateTcp, Some(body)).await
    }

    /// 单关节点动（`value` 为弧度步长）
    pub async fn move_joint(
        &self,
        joint: JointId,
        value: f64,
        direction: Direction,
    ) -> Result<bool, ClientError> {
        let body = encode(
            Endpoint::MoveJoint,
            &JointMoveRequest {
                joint,
                value,
                direction,
            },
        )?;
        self.call(Endpoint::MoveJoint, Some(body)).await
    }

    /// 启动程序
    pub async fn start_program(&self, program_name: &str) -> Result<bool, ClientError> {
        let body = encode(
            Endpoint::StartProgram,
            &StartProgramRequest {
                program_name: program_name.to_string(),
            },
        )?;
        self.call(Endpoint::StartProgram, Some(body)).await
    }

    /// 停止程序
    pub async fn stop_program(&self) -> Result<bool, ClientError> {
        self.call(Endpoint::StopProgram, None).await
    }

    /// 急停
    ///
    /// 与其他操作一样：2xx 时返回 `success` 字段的值，非 2xx 时返回错误。
    pub async fn emergency_stop(&self) -> Result<bool, ClientError> {
        self.call(Endpoint::EmergencyStop, None).await
    }

    async fn call(&self, endpoint: Endpoint, body: Option<Value>) -> Result<bool, ClientError> {
        let url = self.url(endpoint);
        debug!("POST {} ({})", url, endpoint);

        let response = self
            .transport
            .post(&url, body.as_ref())
            .await
            .map_err(|source| {
                warn!("{} request failed: {}", endpoint, source);
                ClientError::Transport { endpoint, source }
            })?;

        if !response.is_success() {
            warn!("{} failed with HTTP {}", endpoint, response.status);
            return Err(ClientError::Status {
                endpoint,
                status: response.status,
            });
        }

        let parsed: ApiResponse =
            serde_json::from_str(&response.body).map_err(|e| ClientError::InvalidResponse {
                endpoint,
                reason: e.to_string(),
            })?;
        debug!("{} -> success={}", endpoint, parsed.success);
        Ok(parsed.success)
    }
}

fn encode<B: Serialize>(endpoint: Endpoint, body: &B) -> Result<Value, ClientError> {
    serde_json::to_value(body).map_err(|e| ClientError::Encode {
        endpoint,
        reason: e.to_string(),
    })
}
