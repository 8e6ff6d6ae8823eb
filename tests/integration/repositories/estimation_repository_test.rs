// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_file_test_repo, create_test_repo};
use appraisal::domain::models::estimation::{
    EstimationPatch, EstimationValidationError, NewEstimation, Pagination, MAX_PAGE_SKIP,
};
use appraisal::domain::repositories::estimation_repository::{
    EstimationRepository, RepositoryError,
};

/// 创建后按ID读取，返回的记录与创建结果完全一致
#[tokio::test]
async fn test_create_then_get_round_trips() {
    let repo = create_test_repo().await;

    let created = repo
        .create(NewEstimation::new("Vintage watch", 100, 500).with_source_url("https://example.com/a.jpg"))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.title, "Vintage watch");
    assert_eq!(created.source_url.as_deref(), Some("https://example.com/a.jpg"));

    let fetched = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn test_find_missing_returns_none() {
    let repo = create_test_repo().await;
    assert_eq!(repo.find_by_id(404).await.unwrap(), None);
}

/// 非法记录在写入前被拒绝，数据库中不留下任何数据
#[tokio::test]
async fn test_create_rejects_invalid_records() {
    let repo = create_test_repo().await;

    let err = repo
        .create(NewEstimation::new("Chair", 500, 100))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::Validation(EstimationValidationError::InvertedRange { .. })
    ));

    let err = repo.create(NewEstimation::new("", 1, 2)).await.unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::Validation(EstimationValidationError::EmptyTitle)
    ));

    assert!(repo.list(Pagination::default()).await.unwrap().is_empty());
}

/// 列表按创建时间倒序，并正确应用 skip/limit
#[tokio::test]
async fn test_list_is_newest_first_and_paginated() {
    let repo = create_test_repo().await;

    let mut ids = Vec::new();
    for i in 0..5 {
        let created = repo
            .create(NewEstimation::new(format!("Item {i}"), i, i * 10))
            .await
            .unwrap();
        ids.push(created.id);
    }

    let all = repo.list(Pagination::new(0, 1000).unwrap()).await.unwrap();
    assert_eq!(all.len(), 5);
    assert!(all
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
    assert_eq!(all[0].id, ids[4]);

    let page = repo.list(Pagination::new(1, 2).unwrap()).await.unwrap();
    let page_ids: Vec<i32> = page.iter().map(|e| e.id).collect();
    assert_eq!(page_ids, vec![ids[3], ids[2]]);

    let beyond = repo.list(Pagination::new(10, 2).unwrap()).await.unwrap();
    assert!(beyond.is_empty());

    let far_beyond = repo
        .list(Pagination::new(MAX_PAGE_SKIP, 10).unwrap())
        .await
        .unwrap();
    assert!(far_beyond.is_empty());
}

#[tokio::test]
async fn test_update_applies_only_provided_fields() {
    let repo = create_test_repo().await;
    let created = repo
        .create(NewEstimation::new("Vintage watch", 100, 500))
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            EstimationPatch {
                max_value: Some(800),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.title, "Vintage watch");
    assert_eq!((updated.min_value, updated.max_value), (100, 800));
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(updated));
}

/// 合并后的记录违反区间约束时拒绝更新，原记录保持不变
#[tokio::test]
async fn test_update_validates_merged_record() {
    let repo = create_test_repo().await;
    let created = repo
        .create(NewEstimation::new("Vintage watch", 100, 500))
        .await
        .unwrap();

    let err = repo
        .update(
            created.id,
            EstimationPatch {
                max_value: Some(50),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::Validation(EstimationValidationError::InvertedRange {
            min_value: 100,
            max_value: 50
        })
    ));

    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn test_update_missing_returns_none() {
    let repo = create_test_repo().await;
    let result = repo
        .update(
            99,
            EstimationPatch {
                title: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn test_empty_patch_returns_record_unchanged() {
    let repo = create_test_repo().await;
    let created = repo
        .create(NewEstimation::new("Teapot", 20, 30))
        .await
        .unwrap();

    let result = repo
        .update(created.id, EstimationPatch::default())
        .await
        .unwrap();
    assert_eq!(result, Some(created));
}

#[tokio::test]
async fn test_delete() {
    let repo = create_test_repo().await;
    let created = repo
        .create(NewEstimation::new("Lamp", 10, 20))
        .await
        .unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
    assert!(!repo.delete(created.id).await.unwrap());
}

/// 多连接文件数据库上并发更新同一记录：全部成功且最后提交的写入生效
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_valid_updates_all_succeed() {
    let (_dir, repo) = create_file_test_repo(10).await;
    let created = repo
        .create(NewEstimation::new("Painting", 100, 200))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for i in 0..20i64 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.update(
                created.id,
                EstimationPatch {
                    max_value: Some(300 + i),
                    ..Default::default()
                },
            )
            .await
        }));
    }

    let mut written = Vec::new();
    for handle in handles {
        let updated = handle
            .await
            .unwrap()
            .expect("valid concurrent update failed")
            .expect("record disappeared");
        written.push(updated.max_value);
    }

    let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.min_value, 100);
    assert!(written.contains(&stored.max_value));
    assert!((300..320).contains(&stored.max_value));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates_keep_invariant() {
    let (_dir, repo) = create_file_test_repo(10).await;
    let created = repo
        .create(NewEstimation::new("Painting", 100, 200))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for i in 0..10i64 {
        let repo = repo.clone();
        let patch = if i % 2 == 0 {
            EstimationPatch {
                min_value: Some(150 + i),
                ..Default::default()
            }
        } else {
            EstimationPatch {
                max_value: Some(120 + i),
                ..Default::default()
            }
        };
        handles.push(tokio::spawn(async move { repo.update(created.id, patch).await }));
    }

    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) | Err(RepositoryError::Validation(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert!(0 <= stored.min_value && stored.min_value <= stored.max_value);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_and_deletes() {
    let (_dir, repo) = create_file_test_repo(10).await;

    let mut handles = Vec::new();
    for i in 0..20i64 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            let created = repo
                .create(NewEstimation::new(format!("Item {i}"), i, i + 10))
                .await?;
            if i % 2 == 0 {
                assert!(repo.delete(created.id).await?);
            }
            Ok::<_, RepositoryError>(())
        }));
    }

    for handle in handles {
        handle.await.unwrap().expect("concurrent write failed");
    }

    let remaining = repo.list(Pagination::default()).await.unwrap();
    assert_eq!(remaining.len(), 10);
}
