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

use appraisal::config::settings::Settings;
use appraisal::domain::repositories::estimation_repository::EstimationRepository;
use appraisal::domain::services::url_validator::UrlValidator;
use appraisal::domain::services::valuator::Valuator;
use appraisal::infrastructure::database::connection;
use appraisal::infrastructure::metrics;
use appraisal::infrastructure::repositories::estimation_repo_impl::EstimationRepositoryImpl;
use appraisal::infrastructure::valuators::openai_valuator::OpenAiValuator;
use appraisal::presentation::routes;
use appraisal::utils::telemetry;
use appraisal::utils::validators::SyntacticUrlValidator;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting appraisal...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    metrics::init_metrics(&settings.metrics);

    // 3. Connect to database and apply migrations
    let db = Arc::new(connection::create_pool(&settings.database).await?);
    info!("Database connection established");
    connection::run_migrations(db.as_ref()).await?;

    // 4. Initialize components
    let repo: Arc<dyn EstimationRepository> = Arc::new(EstimationRepositoryImpl::new(db.clone()));
    let valuator: Arc<dyn Valuator> = Arc::new(OpenAiValuator::new(&settings.valuator)?);
    let url_validator: Arc<dyn UrlValidator> = Arc::new(SyntacticUrlValidator);

    if settings.valuator.api_key.is_none() {
        warn!("Valuator API key not configured; /estimate requests will fail with 502");
    }

    // 5. Start HTTP server
    let app = routes::app(settings.clone(), repo, valuator, url_validator);

    let addr = settings.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
