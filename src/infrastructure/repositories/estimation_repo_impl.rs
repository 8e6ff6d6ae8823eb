// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::estimation::{Estimation, EstimationPatch, NewEstimation, Pagination};
use crate::domain::repositories::estimation_repository::{EstimationRepository, RepositoryError};
use crate::infrastructure::database::entities::estimation;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

/// 估价记录仓库实现
///
/// SQLite 不支持行锁，且延迟事务在读后写时会直接返回 `SQLITE_BUSY`，
/// 因此在 SQLite 上所有写操作经由进程内的写锁串行执行；
/// Postgres 上依赖 `SELECT ... FOR UPDATE` 行锁。
#[derive(Clone)]
pub struct EstimationRepositoryImpl {
    db: Arc<DatabaseConnection>,
    sqlite_writes: Arc<Mutex<()>>,
}

impl EstimationRepositoryImpl {
    /// 创建新的估价记录仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            sqlite_writes: Arc::new(Mutex::new(())),
        }
    }

    async fn write_guard(&self) -> Option<MutexGuard<'_, ()>> {
        match self.db.get_database_backend() {
            DbBackend::Sqlite => Some(self.sqlite_writes.lock().await),
            _ => None,
        }
    }
}

#[async_trait]
impl EstimationRepository for EstimationRepositoryImpl {
    async fn create(&self, new: NewEstimation) -> Result<Estimation, RepositoryError> {
        new.validate()?;
        let _guard = self.write_guard().await;

        let model = estimation::ActiveModel {
            id: NotSet,
            created_at: Set(Utc::now().fixed_offset()),
            title: Set(new.title),
            min_value: Set(new.min_value),
            max_value: Set(new.max_value),
            source_url: Set(new.source_url),
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        debug!("Created estimation {}", inserted.id);
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Estimation>, RepositoryError> {
        let model = estimation::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Estimation>, RepositoryError> {
        let models = estimation::Entity::find()
            .order_by_desc(estimation::Column::CreatedAt)
            .order_by_desc(estimation::Column::Id)
            .offset(page.skip())
            .limit(page.limit())
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(
        &self,
        id: i32,
        patch: EstimationPatch,
    ) -> Result<Option<Estimation>, RepositoryError> {
        // Read, merge, validate and write inside one transaction; dropping
        // the transaction on any early return rolls it back.
        let _guard = self.write_guard().await;
        let txn = self.db.begin().await?;

        let Some(model) = estimation::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        if patch.is_empty() {
            txn.commit().await?;
            return Ok(Some(model.into()));
        }

        let mut merged: Estimation = model.clone().into();
        merged.apply(patch)?;

        let mut active: estimation::ActiveModel = model.into();
        active.title = Set(merged.title);
        active.min_value = Set(merged.min_value);
        active.max_value = Set(merged.max_value);

        let updated = active.update(&txn).await?;
        txn.commit().await?;

        debug!("Updated estimation {}", id);
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        let _guard = self.write_guard().await;
        let result = estimation::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected > 0)
    }
}

impl From<estimation::Model> for Estimation {
    fn from(model: estimation::Model) -> Self {
        Self {
            id: model.id,
            created_at: model.created_at.into(),
            title: model.title,
            min_value: model.min_value,
            max_value: model.max_value,
            source_url: model.source_url,
        }
    }
}
