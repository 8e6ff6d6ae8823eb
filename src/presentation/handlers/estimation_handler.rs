// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::application::dto::estimation_request::{
    EstimationCreateDto, EstimationUpdateDto, ListEstimationsQuery,
};
use crate::application::dto::estimation_response::{DeleteResponseDto, EstimationResponseDto};
use crate::domain::models::estimation::Pagination;
use crate::domain::repositories::estimation_repository::{EstimationRepository, RepositoryError};
use crate::presentation::errors::AppError;
use crate::presentation::extractors::{ApiJson, ApiPath, ApiQuery};

/// 分页获取估价记录，最新的在前
pub async fn list_estimations(
    Extension(repo): Extension<Arc<dyn EstimationRepository>>,
    ApiQuery(query): ApiQuery<ListEstimationsQuery>,
) -> Result<Json<Vec<EstimationResponseDto>>, AppError> {
    let page = Pagination::try_from(query)?;
    let estimations = repo.list(page).await?;
    Ok(Json(estimations.into_iter().map(Into::into).collect()))
}

/// 获取单条估价记录
pub async fn get_estimation(
    Extension(repo): Extension<Arc<dyn EstimationRepository>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<EstimationResponseDto>, AppError> {
    let estimation = repo
        .find_by_id(id)
        .await?
        .ok_or(RepositoryError::NotFound(id))?;
    Ok(Json(estimation.into()))
}

/// 直接创建估价记录
pub async fn create_estimation(
    Extension(repo): Extension<Arc<dyn EstimationRepository>>,
    ApiJson(payload): ApiJson<EstimationCreateDto>,
) -> Result<Json<EstimationResponseDto>, AppError> {
    payload.validate()?;
    let estimation = repo.create(payload.into()).await?;
    Ok(Json(estimation.into()))
}

/// 更新估价记录的部分字段
pub async fn update_estimation(
    Extension(repo): Extension<Arc<dyn EstimationRepository>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<EstimationUpdateDto>,
) -> Result<Json<EstimationResponseDto>, AppError> {
    payload.validate()?;
    let estimation = repo
        .update(id, payload.into())
        .await?
        .ok_or(RepositoryError::NotFound(id))?;
    Ok(Json(estimation.into()))
}

/// 删除估价记录
pub async fn delete_estimation(
    Extension(repo): Extension<Arc<dyn EstimationRepository>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<DeleteResponseDto>, AppError> {
    if !repo.delete(id).await? {
        return Err(RepositoryError::NotFound(id).into());
    }
    Ok(Json(DeleteResponseDto::deleted(id)))
}
