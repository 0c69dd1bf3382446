//! 基于 reqwest 的 HTTP 传输层

use crate::error::TransportError;
use crate::transport::{Transport, TransportResponse};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Duration;

/// reqwest 实现的传输层
///
/// 默认不设置超时：挂起的请求不会被取消。
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// 创建传输层
    ///
    /// `timeout` 为 `None` 时请求没有超时限制。
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| TransportError::new(e.to_string()))?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn post(
        &self,
        url: &str,
        body: Option<&Value>,
    ) -> Result<TransportResponse, TransportError> {
        let mut request = self.http.post(url).header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}
