// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::use_cases::valuation_pipeline::CompletedValuation;
use crate::domain::models::estimation::Estimation;

/// 估价记录响应DTO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstimationResponseDto {
    pub id: i32,
    pub title: String,
    pub min_value: i64,
    pub max_value: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl From<Estimation> for EstimationResponseDto {
    fn from(estimation: Estimation) -> Self {
        Self {
            id: estimation.id,
            title: estimation.title,
            min_value: estimation.min_value,
            max_value: estimation.max_value,
            created_at: estimation.created_at,
            source_url: estimation.source_url,
        }
    }
}

/// 估价响应DTO：原始估价负载与规范化后的标题
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValuationResponseDto {
    pub valuation: Value,
    pub title: String,
}

impl From<CompletedValuation> for ValuationResponseDto {
    fn from(completed: CompletedValuation) -> Self {
        Self {
            valuation: completed.result.raw,
            title: completed.result.description,
        }
    }
}

/// 删除确认响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteResponseDto {
    pub message: String,
}

impl DeleteResponseDto {
    pub fn deleted(id: i32) -> Self {
        Self {
            message: format!("Estimation {} deleted successfully", id),
        }
    }
}
