// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

use crate::application::use_cases::valuation_pipeline::ValuationError;
use crate::domain::models::estimation::EstimationValidationError;
use crate::domain::repositories::estimation_repository::RepositoryError;
use crate::domain::services::valuation_normalizer::NormalizationError;

/// 请求在进入处理器前被提取器拒绝（路径、查询参数或请求体无法解析）
#[derive(Error, Debug)]
#[error("{detail}")]
pub struct RejectedRequest {
    status: StatusCode,
    detail: String,
}

impl RejectedRequest {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

/// 应用错误类型
///
/// 封装所有可能的应用层错误，按错误类型映射HTTP状态码：
/// 输入错误 400，记录不存在 404，上游故障 502，其余 500
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    pub fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<ValuationError>() {
            return match err {
                ValuationError::InvalidInputUrl(_) => StatusCode::BAD_REQUEST,
                ValuationError::UpstreamCallFailure(_) | ValuationError::Normalization(_) => {
                    StatusCode::BAD_GATEWAY
                }
                ValuationError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
        }

        if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            return match err {
                RepositoryError::NotFound(_) => StatusCode::NOT_FOUND,
                RepositoryError::Validation(_) => StatusCode::BAD_REQUEST,
                RepositoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
        }

        if let Some(rejected) = self.0.downcast_ref::<RejectedRequest>() {
            return rejected.status;
        }

        if self.0.is::<NormalizationError>() {
            return StatusCode::BAD_GATEWAY;
        }

        if self.0.is::<EstimationValidationError>() || self.0.is::<ValidationErrors>() {
            return StatusCode::BAD_REQUEST;
        }

        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.0.to_string();

        if status.is_server_error() {
            if status == StatusCode::BAD_GATEWAY {
                warn!("Upstream failure: {}", detail);
            } else {
                error!("Internal error: {:?}", self.0);
            }
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
