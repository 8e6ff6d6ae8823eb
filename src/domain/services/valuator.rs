// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::valuation::UpstreamPayload;
use async_trait::async_trait;
use thiserror::Error;

/// 外部估价服务调用错误
#[derive(Error, Debug)]
pub enum ValuatorError {
    #[error("Valuation service is not configured: {0}")]
    NotConfigured(String),
    #[error("Request to valuation service failed: {0}")]
    Transport(String),
    #[error("Valuation service returned error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Unreadable response from valuation service: {0}")]
    InvalidResponse(String),
}

impl ValuatorError {
    /// 错误类别名称，用于调试输出
    pub fn kind(&self) -> &'static str {
        match self {
            ValuatorError::NotConfigured(_) => "not_configured",
            ValuatorError::Transport(_) => "transport",
            ValuatorError::Status { .. } => "status",
            ValuatorError::InvalidResponse(_) => "invalid_response",
        }
    }
}

/// 估价能力接口
///
/// 每个模型提供方实现一个变体。返回 `Ok(None)` 表示服务正常应答但没有内容，
/// 与调用失败（`Err`）区分开。
#[async_trait]
pub trait Valuator: Send + Sync {
    async fn valuate(&self, image_url: &str) -> Result<Option<UpstreamPayload>, ValuatorError>;
}
