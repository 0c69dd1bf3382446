//! # Armdeck Client
//!
//! 机器人控制服务（REST）的无状态命令客户端。
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! use armdeck_client::{ClientConfig, CommandClient};
//! use armdeck_types::Direction;
//!
//! # async fn run() -> Result<(), armdeck_client::ClientError> {
//! let client = CommandClient::new(ClientConfig::default())?;
//! let accepted = client.move_joint(1, 0.01, Direction::Positive).await?;
//! println!("accepted: {}", accepted);
//! # Ok(())
//! # }
//! ```
//!
//! 传输层通过 [`Transport`] trait 抽象；启用 `mock` feature 后可使用
//! 内存中的 `MockTransport` 进行测试。

mod client;
mod endpoint;
mod error;
#[cfg(feature = "http")]
mod http;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod request;
mod transport;

#[cfg(feature = "http")]
pub use client::HttpCommandClient;
pub use client::{ClientConfig, CommandClient, DEFAULT_API_BASE_URL};
pub use endpoint::Endpoint;
pub use error::{ClientError, TransportError};
#[cfg(feature = "http")]
pub use http::HttpTransport;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockReply, MockTransport, RecordedRequest};
pub use request::{
    ApiResponse, ConnectRequest, DEFAULT_CONTROL_PORT, JointMoveRequest, RotateRequest,
    StartProgramRequest, TranslateRequest,
};
pub use transport::{Transport, TransportResponse};
