// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::models::estimation::MAX_TITLE_CHARS;
use crate::domain::models::valuation::{json_type_name, UpstreamPayload, ValuationResult};

/// 估价响应中必须出现的字段，按诊断信息中的顺序排列
pub const REQUIRED_FIELDS: [&str; 3] = ["description", "min_value", "max_value"];

/// 估价结果规范化错误
///
/// 每种错误都携带足够的诊断信息，调用方无需猜测上游的具体问题
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    #[error("Valuation service returned empty response")]
    EmptyUpstreamResponse,
    #[error("Invalid JSON response from valuation service: {0}")]
    MalformedUpstreamPayload(String),
    #[error("Expected object response from valuation service, got {observed}")]
    UnexpectedUpstreamShape { observed: &'static str },
    #[error(
        "Missing required fields in valuation response: {missing:?}. Available fields: {present:?}"
    )]
    MissingUpstreamFields {
        missing: Vec<String>,
        present: Vec<String>,
    },
    #[error("Invalid data types in valuation response: {0}")]
    InvalidUpstreamFieldType(String),
    #[error(
        "Invalid value range in valuation response: min_value={min_value}, max_value={max_value}"
    )]
    InvalidUpstreamValueRange { min_value: i64, max_value: i64 },
}

/// 将外部估价服务的原始负载规范化为 [`ValuationResult`]
///
/// 依次执行：非空检查 → 形状规范化（文本需解析为JSON对象）→ 必填字段检查 →
/// 类型转换 → 区间校验，任一步失败立即返回。纯函数，无I/O。
pub fn normalize(payload: Option<UpstreamPayload>) -> Result<ValuationResult, NormalizationError> {
    let value = match payload {
        None | Some(UpstreamPayload::Structured(Value::Null)) => {
            return Err(NormalizationError::EmptyUpstreamResponse)
        }
        Some(UpstreamPayload::Text(text)) => {
            if text.trim().is_empty() {
                return Err(NormalizationError::EmptyUpstreamResponse);
            }
            serde_json::from_str::<Value>(&text)
                .map_err(|e| NormalizationError::MalformedUpstreamPayload(e.to_string()))?
        }
        Some(UpstreamPayload::Structured(value)) => value,
    };

    let Value::Object(fields) = &value else {
        return Err(NormalizationError::UnexpectedUpstreamShape {
            observed: json_type_name(&value),
        });
    };

    check_required_fields(fields)?;

    let description = coerce_description(&fields["description"])?;
    let min_value = coerce_integer("min_value", &fields["min_value"])?;
    let max_value = coerce_integer("max_value", &fields["max_value"])?;

    if min_value < 0 || max_value < 0 || min_value > max_value {
        return Err(NormalizationError::InvalidUpstreamValueRange {
            min_value,
            max_value,
        });
    }

    Ok(ValuationResult {
        raw: value,
        description,
        min_value,
        max_value,
    })
}

fn check_required_fields(fields: &Map<String, Value>) -> Result<(), NormalizationError> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|key| !fields.contains_key(**key))
        .map(|key| key.to_string())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(NormalizationError::MissingUpstreamFields {
        missing,
        present: fields.keys().cloned().collect(),
    })
}

fn coerce_description(value: &Value) -> Result<String, NormalizationError> {
    let description = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => {
            return Err(NormalizationError::InvalidUpstreamFieldType(format!(
                "description: expected text, got {}",
                json_type_name(other)
            )))
        }
    };

    if description.is_empty() {
        return Err(NormalizationError::InvalidUpstreamFieldType(
            "description: empty text".to_string(),
        ));
    }

    let chars = description.chars().count();
    if chars > MAX_TITLE_CHARS {
        return Err(NormalizationError::InvalidUpstreamFieldType(format!(
            "description: {chars} characters exceeds the {MAX_TITLE_CHARS} character limit"
        )));
    }

    Ok(description)
}

fn coerce_integer(field: &str, value: &Value) -> Result<i64, NormalizationError> {
    let invalid =
        |detail: String| NormalizationError::InvalidUpstreamFieldType(format!("{field}: {detail}"));

    match value {
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                return Ok(integer);
            }
            // Fractional values are truncated toward zero
            match number.as_f64().map(f64::trunc) {
                Some(truncated)
                    if truncated.is_finite()
                        && truncated >= i64::MIN as f64
                        && truncated < i64::MAX as f64 =>
                {
                    Ok(truncated as i64)
                }
                _ => Err(invalid(format!("{number} is out of range"))),
            }
        }
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|e| invalid(format!("invalid integer literal {text:?}: {e}"))),
        other => Err(invalid(format!(
            "expected an integer, got {}",
            json_type_name(other)
        ))),
    }
}
