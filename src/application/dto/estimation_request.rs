// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::models::estimation::{
    EstimationPatch, EstimationValidationError, NewEstimation, Pagination, DEFAULT_PAGE_LIMIT,
};

/// 创建估价记录请求DTO
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_create_range"))]
pub struct EstimationCreateDto {
    /// 物品描述
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    /// 最低估值
    #[validate(range(min = 0))]
    pub min_value: i64,
    /// 最高估值
    #[validate(range(min = 0))]
    pub max_value: i64,
}

impl From<EstimationCreateDto> for NewEstimation {
    fn from(dto: EstimationCreateDto) -> Self {
        NewEstimation::new(dto.title, dto.min_value, dto.max_value)
    }
}

/// 更新估价记录请求DTO
///
/// 只更新提供的字段；两个值同时提供时在此处校验区间，
/// 只提供一个时由仓库对合并后的记录校验
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_update_range"))]
pub struct EstimationUpdateDto {
    #[validate(length(min = 1, max = 500))]
    pub title: Option<String>,
    #[validate(range(min = 0))]
    pub min_value: Option<i64>,
    #[validate(range(min = 0))]
    pub max_value: Option<i64>,
}

impl From<EstimationUpdateDto> for EstimationPatch {
    fn from(dto: EstimationUpdateDto) -> Self {
        EstimationPatch {
            title: dto.title,
            min_value: dto.min_value,
            max_value: dto.max_value,
        }
    }
}

/// 估价记录列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct ListEstimationsQuery {
    /// 跳过的记录数
    #[serde(default)]
    pub skip: u64,
    /// 返回的最大记录数（1-1000）
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl TryFrom<ListEstimationsQuery> for Pagination {
    type Error = EstimationValidationError;

    fn try_from(query: ListEstimationsQuery) -> Result<Self, Self::Error> {
        Pagination::new(query.skip, query.limit)
    }
}

/// 估价请求查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct ValuationQuery {
    /// 待估价的图片URL
    pub image_url: String,
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

fn inverted_range() -> ValidationError {
    let mut error = ValidationError::new("value_range");
    error.message = Some("Minimum value cannot be greater than maximum value".into());
    error
}

fn validate_create_range(dto: &EstimationCreateDto) -> Result<(), ValidationError> {
    if dto.min_value > dto.max_value {
        return Err(inverted_range());
    }
    Ok(())
}

fn validate_update_range(dto: &EstimationUpdateDto) -> Result<(), ValidationError> {
    match (dto.min_value, dto.max_value) {
        (Some(min_value), Some(max_value)) if min_value > max_value => Err(inverted_range()),
        _ => Ok(()),
    }
}
