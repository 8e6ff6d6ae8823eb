// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use appraisal::config::settings::{DatabaseSettings, Settings};
use appraisal::domain::models::valuation::UpstreamPayload;
use appraisal::domain::repositories::estimation_repository::EstimationRepository;
use appraisal::domain::services::valuator::{Valuator, ValuatorError};
use appraisal::infrastructure::database::connection;
use appraisal::infrastructure::repositories::estimation_repo_impl::EstimationRepositoryImpl;
use appraisal::presentation::routes;
use appraisal::utils::validators::SyntacticUrlValidator;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// 创建已迁移的内存SQLite仓库
///
/// 内存数据库按连接隔离，因此连接池固定为单连接
pub async fn create_test_repo() -> Arc<EstimationRepositoryImpl> {
    open_repo("sqlite::memory:".to_string(), 1).await
}

/// 创建基于临时文件的多连接SQLite仓库，用于并发写入测试
///
/// 返回的 `TempDir` 需在测试期间保持存活
pub async fn create_file_test_repo(max_connections: u32) -> (TempDir, Arc<EstimationRepositoryImpl>) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("estimations.db").display()
    );
    let repo = open_repo(url, max_connections).await;
    (dir, repo)
}

async fn open_repo(url: String, max_connections: u32) -> Arc<EstimationRepositoryImpl> {
    let settings = DatabaseSettings {
        url,
        max_connections: Some(max_connections),
        min_connections: Some(1),
        connect_timeout: Some(10),
        idle_timeout: None,
        sql_logging: false,
    };

    let db = connection::create_pool(&settings)
        .await
        .expect("Failed to open test database");
    connection::run_migrations(&db)
        .await
        .expect("Failed to run migrations");

    Arc::new(EstimationRepositoryImpl::new(Arc::new(db)))
}

/// 按预设行为应答的估价服务
pub struct StubValuator {
    reply: Result<Option<UpstreamPayload>, String>,
    calls: AtomicUsize,
}

impl StubValuator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(Some(UpstreamPayload::Text(text.to_string()))),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self {
            reply: Ok(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Valuator for StubValuator {
    async fn valuate(&self, _image_url: &str) -> Result<Option<UpstreamPayload>, ValuatorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .clone()
            .map_err(ValuatorError::Transport)
    }
}

pub struct TestApp {
    pub router: Router,
    pub repo: Arc<EstimationRepositoryImpl>,
    pub valuator: Arc<StubValuator>,
}

pub async fn create_test_app(valuator: StubValuator) -> TestApp {
    create_test_app_with(valuator, false).await
}

pub async fn create_test_app_with(valuator: StubValuator, debug_endpoints: bool) -> TestApp {
    let mut settings = Settings::defaults().expect("Failed to build default settings");
    settings.server.debug_endpoints = debug_endpoints;

    let repo = create_test_repo().await;
    let valuator = Arc::new(valuator);
    let repo_dyn: Arc<dyn EstimationRepository> = repo.clone();
    let valuator_dyn: Arc<dyn Valuator> = valuator.clone();

    let router = routes::app(
        Arc::new(settings),
        repo_dyn,
        valuator_dyn,
        Arc::new(SyntacticUrlValidator),
    );

    TestApp {
        router,
        repo,
        valuator,
    }
}

impl TestApp {
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }
}
