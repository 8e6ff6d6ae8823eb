// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::settings::ValuatorSettings;
use crate::domain::models::valuation::UpstreamPayload;
use crate::domain::services::valuator::{Valuator, ValuatorError};

/// OpenAI 估价服务 - 通过 Responses API 对图片中的物品进行估价
///
/// # 配置
///
/// 由 [`ValuatorSettings`] 提供：
/// - `api_key` - API密钥，未配置时每次调用都返回 `NotConfigured`
/// - `model` - 使用的模型名称（默认 gpt-4.1-mini）
/// - `api_base_url` - API基础URL
/// - `language` - 物品描述使用的语言
/// - `timeout_secs` - 单次请求超时
pub struct OpenAiValuator {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    api_base_url: String,
    prompt: String,
}

impl OpenAiValuator {
    pub fn new(settings: &ValuatorSettings) -> Result<Self, ValuatorError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| ValuatorError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            prompt: appraisal_prompt(&settings.language),
        })
    }

    fn request_body(&self, image_url: &str) -> Value {
        json!({
            "model": self.model,
            "input": [{
                "role": "user",
                "content": [
                    { "type": "input_text", "text": self.prompt },
                    { "type": "input_image", "image_url": image_url }
                ]
            }]
        })
    }
}

#[async_trait]
impl Valuator for OpenAiValuator {
    async fn valuate(&self, image_url: &str) -> Result<Option<UpstreamPayload>, ValuatorError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| ValuatorError::NotConfigured("API key not configured".to_string()))?;

        let url = format!("{}/responses", self.api_base_url);
        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&self.request_body(image_url))
            .send()
            .await
            .map_err(|e| ValuatorError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ValuatorError::Status { status, body });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ValuatorError::InvalidResponse(e.to_string()))?;

        let text = output_text(&body);
        debug!(model = %self.model, "Valuation output: {:?}", text);

        Ok(text.map(|text| UpstreamPayload::Text(strip_code_fence(&text).to_string())))
    }
}

fn appraisal_prompt(language: &str) -> String {
    format!(
        "You are a seasoned connoisseur of antiques and historical artifacts, with deep \
        knowledge of art history, craftsmanship and the provenance of collectible items. \
        Look at the item in the image, give it a short name and estimate the range of its \
        value on the market. Write the name in {language}. \
        Return ONLY a JSON object, no markdown formatting, with exactly these keys: \
        \"description\" (string, the short name), \"min_value\" (non-negative integer) and \
        \"max_value\" (non-negative integer, not lower than min_value)."
    )
}

/// 提取 Responses API 返回中的全部文本输出
///
/// 优先使用顶层 `output_text`，否则拼接 `output[].content[]` 中
/// 类型为 `output_text` 的片段；没有任何文本时返回 `None`
fn output_text(body: &Value) -> Option<String> {
    if let Some(text) = body.get("output_text").and_then(Value::as_str) {
        return Some(text.to_string());
    }

    let parts: Vec<&str> = body
        .get("output")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| item.get("content").and_then(Value::as_array))
        .flatten()
        .filter(|part| part.get("type").and_then(Value::as_str) == Some("output_text"))
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.concat())
    }
}

/// 去掉包裹输出的 Markdown 代码块，开头围栏后的信息串（如 `json`、`JSON`）一并去掉
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}
