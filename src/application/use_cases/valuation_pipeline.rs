// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::models::estimation::{Estimation, NewEstimation};
use crate::domain::models::valuation::ValuationResult;
use crate::domain::repositories::estimation_repository::{EstimationRepository, RepositoryError};
use crate::domain::services::url_validator::UrlValidator;
use crate::domain::services::valuation_normalizer::{self, NormalizationError};
use crate::domain::services::valuator::Valuator;
use crate::infrastructure::metrics::{self, ValuationOutcome};

/// 估价流程错误
///
/// 区分三类故障：输入错误、上游（外部估价服务）故障、内部持久化故障
#[derive(Error, Debug)]
pub enum ValuationError {
    #[error("Invalid URL format provided: {0}")]
    InvalidInputUrl(String),
    #[error("Valuation service call failed: {0}")]
    UpstreamCallFailure(String),
    #[error(transparent)]
    Normalization(#[from] NormalizationError),
    #[error("Failed to persist estimation: {0}")]
    Persistence(#[from] RepositoryError),
}

impl ValuationError {
    fn outcome(&self) -> ValuationOutcome {
        match self {
            ValuationError::InvalidInputUrl(_) => ValuationOutcome::InvalidUrl,
            ValuationError::UpstreamCallFailure(_) => ValuationOutcome::UpstreamFailure,
            ValuationError::Normalization(_) => ValuationOutcome::NormalizationFailure,
            ValuationError::Persistence(_) => ValuationOutcome::PersistenceFailure,
        }
    }
}

/// 一次成功估价的结果：规范化后的估价与新建的记录
#[derive(Debug, Clone)]
pub struct CompletedValuation {
    pub result: ValuationResult,
    pub estimation: Estimation,
}

/// 估价流程
///
/// 校验URL → 调用外部估价服务 → 规范化 → 持久化。任何一步失败即终止本次请求，
/// 不做重试。
pub struct ValuationPipeline {
    repo: Arc<dyn EstimationRepository>,
    valuator: Arc<dyn Valuator>,
    url_validator: Arc<dyn UrlValidator>,
    upstream_timeout: Duration,
}

impl ValuationPipeline {
    pub fn new(
        repo: Arc<dyn EstimationRepository>,
        valuator: Arc<dyn Valuator>,
        url_validator: Arc<dyn UrlValidator>,
        upstream_timeout: Duration,
    ) -> Self {
        Self {
            repo,
            valuator,
            url_validator,
            upstream_timeout,
        }
    }

    #[instrument(skip(self))]
    pub async fn run(&self, image_url: &str) -> Result<CompletedValuation, ValuationError> {
        let result = self.execute(image_url).await;
        match &result {
            Ok(_) => metrics::record_valuation(ValuationOutcome::Success),
            Err(e) => metrics::record_valuation(e.outcome()),
        }
        result
    }

    async fn execute(&self, image_url: &str) -> Result<CompletedValuation, ValuationError> {
        let image_url = image_url.trim();

        // Reject bad input before paying for an upstream call
        if !self.url_validator.is_valid(image_url) {
            return Err(ValuationError::InvalidInputUrl(image_url.to_string()));
        }

        info!("Requesting valuation");
        let started = Instant::now();
        let raw = tokio::time::timeout(self.upstream_timeout, self.valuator.valuate(image_url))
            .await
            .map_err(|_| {
                ValuationError::UpstreamCallFailure(format!(
                    "no response within {}s",
                    self.upstream_timeout.as_secs()
                ))
            })?
            .map_err(|e| ValuationError::UpstreamCallFailure(e.to_string()))?;
        metrics::record_upstream_latency(started.elapsed());
        debug!("Raw valuation payload: {:?}", raw);

        let result = valuation_normalizer::normalize(raw).inspect_err(|e| {
            warn!("Rejected valuation payload: {}", e);
        })?;

        let new_estimation = NewEstimation::new(
            result.description.clone(),
            result.min_value,
            result.max_value,
        )
        .with_source_url(image_url);

        let estimation = self.repo.create(new_estimation).await.inspect_err(|e| {
            error!("Failed to save estimation: {}", e);
        })?;
        metrics::record_estimation_created();

        info!(
            estimation_id = estimation.id,
            min_value = estimation.min_value,
            max_value = estimation.max_value,
            "Valuation stored"
        );

        Ok(CompletedValuation { result, estimation })
    }
}
