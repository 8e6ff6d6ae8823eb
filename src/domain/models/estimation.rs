// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 标题最大字符数
pub const MAX_TITLE_CHARS: usize = 500;
/// 分页默认条数
pub const DEFAULT_PAGE_LIMIT: u64 = 100;
/// 分页最大条数
pub const MAX_PAGE_LIMIT: u64 = 1000;
/// 分页最大偏移量，数据库以有符号64位整数绑定 OFFSET
pub const MAX_PAGE_SKIP: u64 = i64::MAX as u64;

/// 估价记录校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimationValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Title exceeds {MAX_TITLE_CHARS} characters ({0})")]
    TitleTooLong(usize),
    #[error("Values cannot be negative (min_value={min_value}, max_value={max_value})")]
    NegativeValue { min_value: i64, max_value: i64 },
    #[error("Minimum value cannot be greater than maximum value ({min_value} > {max_value})")]
    InvertedRange { min_value: i64, max_value: i64 },
    #[error("limit must be between 1 and {MAX_PAGE_LIMIT}, got {0}")]
    InvalidLimit(u64),
    #[error("skip must not exceed {MAX_PAGE_SKIP}, got {0}")]
    InvalidSkip(u64),
}

/// 估价记录
///
/// 持久化的物品描述与估值区间。`id` 与 `created_at` 由存储层在创建时分配，
/// 之后不再变化；任何时刻都满足 `0 <= min_value <= max_value`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimation {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub min_value: i64,
    pub max_value: i64,
    /// 估价所用图片的来源URL，管理端直接创建的记录没有该字段
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// 待创建的估价记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEstimation {
    pub title: String,
    pub min_value: i64,
    pub max_value: i64,
    pub source_url: Option<String>,
}

impl NewEstimation {
    pub fn new(title: impl Into<String>, min_value: i64, max_value: i64) -> Self {
        Self {
            title: title.into(),
            min_value,
            max_value,
            source_url: None,
        }
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn validate(&self) -> Result<(), EstimationValidationError> {
        validate_title(&self.title)?;
        validate_value_range(self.min_value, self.max_value)
    }
}

/// 估价记录的部分更新，`None` 表示保持原值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EstimationPatch {
    pub title: Option<String>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
}

impl EstimationPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.min_value.is_none() && self.max_value.is_none()
    }
}

impl Estimation {
    /// 将补丁合并到当前记录，并对合并后的整条记录重新校验
    ///
    /// 校验失败时原记录保持不变
    pub fn apply(&mut self, patch: EstimationPatch) -> Result<(), EstimationValidationError> {
        let title = patch.title.unwrap_or_else(|| self.title.clone());
        let min_value = patch.min_value.unwrap_or(self.min_value);
        let max_value = patch.max_value.unwrap_or(self.max_value);

        validate_title(&title)?;
        validate_value_range(min_value, max_value)?;

        self.title = title;
        self.min_value = min_value;
        self.max_value = max_value;
        Ok(())
    }
}

pub fn validate_title(title: &str) -> Result<(), EstimationValidationError> {
    if title.trim().is_empty() {
        return Err(EstimationValidationError::EmptyTitle);
    }
    let chars = title.chars().count();
    if chars > MAX_TITLE_CHARS {
        return Err(EstimationValidationError::TitleTooLong(chars));
    }
    Ok(())
}

pub fn validate_value_range(min_value: i64, max_value: i64) -> Result<(), EstimationValidationError> {
    if min_value < 0 || max_value < 0 {
        return Err(EstimationValidationError::NegativeValue {
            min_value,
            max_value,
        });
    }
    if min_value > max_value {
        return Err(EstimationValidationError::InvertedRange {
            min_value,
            max_value,
        });
    }
    Ok(())
}

/// 分页参数
///
/// 只能通过 [`Pagination::new`] 构造，保证 `limit` 位于 `[1, 1000]`，
/// `skip` 不超过 [`MAX_PAGE_SKIP`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    skip: u64,
    limit: u64,
}

impl Pagination {
    pub fn new(skip: u64, limit: u64) -> Result<Self, EstimationValidationError> {
        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            return Err(EstimationValidationError::InvalidLimit(limit));
        }
        if skip > MAX_PAGE_SKIP {
            return Err(EstimationValidationError::InvalidSkip(skip));
        }
        Ok(Self { skip, limit })
    }

    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}
