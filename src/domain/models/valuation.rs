// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use serde_json::Value;

/// 外部估价服务返回的原始负载
///
/// 模型可能返回文本（通常是JSON字符串），也可能直接返回结构化数据
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamPayload {
    Text(String),
    Structured(Value),
}

impl UpstreamPayload {
    /// 负载类型名称，用于诊断信息
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamPayload::Text(_) => "text",
            UpstreamPayload::Structured(value) => json_type_name(value),
        }
    }
}

impl From<String> for UpstreamPayload {
    fn from(text: String) -> Self {
        UpstreamPayload::Text(text)
    }
}

impl From<&str> for UpstreamPayload {
    fn from(text: &str) -> Self {
        UpstreamPayload::Text(text.to_string())
    }
}

impl From<Value> for UpstreamPayload {
    fn from(value: Value) -> Self {
        UpstreamPayload::Structured(value)
    }
}

/// 规范化后的估价结果
///
/// 只存在于一次估价请求内部，不单独持久化。`raw` 保留解析后的原始对象，
/// 作为审计信息随响应返回。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationResult {
    pub raw: Value,
    pub description: String,
    pub min_value: i64,
    pub max_value: i64,
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
