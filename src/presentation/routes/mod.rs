// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::valuation_pipeline::ValuationPipeline;
use crate::config::settings::Settings;
use crate::domain::repositories::estimation_repository::EstimationRepository;
use crate::domain::services::url_validator::UrlValidator;
use crate::domain::services::valuator::Valuator;
use crate::presentation::handlers::{estimation_handler, info_handler, valuation_handler};

/// 创建应用路由
///
/// # 参数
///
/// * `debug_endpoints` - 是否注册 `/debug-valuate`
///
/// # 返回值
///
/// 返回未挂载任何依赖的路由，依赖通过 `Extension` 层注入
pub fn routes(debug_endpoints: bool) -> Router {
    let info_routes = Router::new()
        .route("/health", get(info_handler::health_check))
        .route("/info", get(info_handler::info));

    let valuation_routes = Router::new().route("/estimate", get(valuation_handler::estimate));
    let valuation_routes = if debug_endpoints {
        valuation_routes.route("/debug-valuate", get(valuation_handler::debug_valuate))
    } else {
        valuation_routes
    };

    let estimation_routes = Router::new()
        .route(
            "/estimations",
            get(estimation_handler::list_estimations).post(estimation_handler::create_estimation),
        )
        .route(
            "/estimations/",
            get(estimation_handler::list_estimations).post(estimation_handler::create_estimation),
        )
        .route(
            "/estimations/{id}",
            get(estimation_handler::get_estimation)
                .put(estimation_handler::update_estimation)
                .delete(estimation_handler::delete_estimation),
        );

    Router::new()
        .merge(info_routes)
        .merge(valuation_routes)
        .merge(estimation_routes)
}

/// 组装完整应用：路由 + 依赖注入 + 请求追踪
pub fn app(
    settings: Arc<Settings>,
    repo: Arc<dyn EstimationRepository>,
    valuator: Arc<dyn Valuator>,
    url_validator: Arc<dyn UrlValidator>,
) -> Router {
    let pipeline = Arc::new(ValuationPipeline::new(
        repo.clone(),
        valuator.clone(),
        url_validator,
        settings.valuator.timeout(),
    ));

    routes(settings.server.debug_endpoints)
        .layer(Extension(pipeline))
        .layer(Extension(repo))
        .layer(Extension(valuator))
        .layer(Extension(settings))
        .layer(TraceLayer::new_for_http())
}
