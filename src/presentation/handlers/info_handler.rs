// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::config::settings::Settings;

/// 应用信息端点
pub async fn info(Extension(settings): Extension<Arc<Settings>>) -> Json<Value> {
    Json(json!({
        "app_name": settings.app.name,
        "version": env!("CARGO_PKG_VERSION"),
        "description": settings.app.description
    }))
}

/// 健康检查端点
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
