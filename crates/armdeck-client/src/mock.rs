//! 内存中的 Mock 传输层（测试用）
//!
//! 记录每个请求，并按脚本依次返回响应；脚本耗尽后返回默认响应
//! `200 {"success":true}`。

use crate::error::TransportError;
use crate::transport::{Transport, TransportResponse};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// 预设的响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// 返回指定状态码与响应体
    Status(u16, String),
    /// 模拟网络失败
    NetworkError(String),
}

impl MockReply {
    /// `2xx` + `{"success": <success>}`
    pub fn success(success: bool) -> Self {
        MockReply::Status(200, format!(r#"{{"success":{}}}"#, success))
    }

    /// 指定状态码，空响应体
    pub fn status(status: u16) -> Self {
        MockReply::Status(status, String::new())
    }
}

/// 已记录的请求
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
struct MockState {
    replies: VecDeque<MockReply>,
    requests: Vec<RecordedRequest>,
}

/// Mock 传输层
#[derive(Debug, Default)]
pub struct MockTransport {
    state: Mutex<MockState>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以一组预设响应创建
    pub fn with_replies(replies: impl IntoIterator<Item = MockReply>) -> Self {
        let mock = Self::new();
        for reply in replies {
            mock.push_reply(reply);
        }
        mock
    }

    /// 追加一个预设响应
    pub fn push_reply(&self, reply: MockReply) {
        self.lock().replies.push_back(reply);
    }

    /// 全部已记录请求
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// 最后一个请求
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.lock().requests.last().cloned()
    }

    /// 已记录请求数
    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        // 测试线程 panic 后依然可以读取记录
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Transport for MockTransport {
    async fn post(
        &self,
        url: &str,
        body: Option<&Value>,
    ) -> Result<TransportResponse, TransportError> {
        let reply = {
            let mut state = self.lock();
            state.requests.push(RecordedRequest {
                url: url.to_string(),
                body: body.cloned(),
            });
            state.replies.pop_front()
        };

        match reply.unwrap_or_else(|| MockReply::success(true)) {
            MockReply::Status(status, body) => Ok(TransportResponse::new(status, body)),
            MockReply::NetworkError(message) => Err(TransportError::new(message)),
        }
    }
}
