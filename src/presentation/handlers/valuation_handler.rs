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
use serde_json::{json, Value};
use std::sync::Arc;

use crate::application::dto::estimation_request::ValuationQuery;
use crate::application::dto::estimation_response::ValuationResponseDto;
use crate::application::use_cases::valuation_pipeline::ValuationPipeline;
use crate::domain::models::valuation::UpstreamPayload;
use crate::domain::services::valuator::Valuator;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::ApiQuery;

/// 对图片URL估价并保存为估价记录
pub async fn estimate(
    Extension(pipeline): Extension<Arc<ValuationPipeline>>,
    ApiQuery(query): ApiQuery<ValuationQuery>,
) -> Result<Json<ValuationResponseDto>, AppError> {
    let completed = pipeline.run(&query.image_url).await?;
    Ok(Json(completed.into()))
}

/// 调试端点：直接调用估价服务并描述其原始返回，不做规范化也不持久化
pub async fn debug_valuate(
    Extension(valuator): Extension<Arc<dyn Valuator>>,
    ApiQuery(query): ApiQuery<ValuationQuery>,
) -> Json<Value> {
    let body = match valuator.valuate(&query.image_url).await {
        Ok(None) => json!({
            "result": null,
            "type": "none",
            "is_none": true,
            "is_empty": false,
            "length": 0
        }),
        Ok(Some(payload)) => {
            let kind = payload.kind();
            let (result, text) = match payload {
                UpstreamPayload::Text(text) => (Value::String(text.clone()), text),
                UpstreamPayload::Structured(value) => {
                    let text = value.to_string();
                    (value, text)
                }
            };
            json!({
                "result": result,
                "type": kind,
                "is_none": false,
                "is_empty": text.is_empty(),
                "length": text.chars().count()
            })
        }
        Err(e) => json!({
            "error": e.to_string(),
            "error_type": e.kind()
        }),
    };

    Json(body)
}
