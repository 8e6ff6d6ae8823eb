// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::estimation::{
    Estimation, EstimationPatch, EstimationValidationError, NewEstimation, Pagination,
};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 写入前的记录校验失败
    #[error(transparent)]
    Validation(#[from] EstimationValidationError),
    /// 记录未找到
    #[error("Estimation with id {0} not found")]
    NotFound(i32),
}

/// 估价记录仓库特质
///
/// 所有写操作在返回前提交；创建与更新在写入前校验整条记录，
/// 校验失败时不产生任何写入。
#[async_trait]
pub trait EstimationRepository: Send + Sync {
    /// 创建记录，分配 `id` 与 `created_at`
    async fn create(&self, estimation: NewEstimation) -> Result<Estimation, RepositoryError>;
    /// 根据ID查找记录，不存在时返回 `None`
    async fn find_by_id(&self, id: i32) -> Result<Option<Estimation>, RepositoryError>;
    /// 按 `created_at` 倒序分页列出记录
    async fn list(&self, page: Pagination) -> Result<Vec<Estimation>, RepositoryError>;
    /// 部分更新，合并后重新校验；记录不存在时返回 `None`
    async fn update(
        &self,
        id: i32,
        patch: EstimationPatch,
    ) -> Result<Option<Estimation>, RepositoryError>;
    /// 删除记录，返回是否确实删除
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}
