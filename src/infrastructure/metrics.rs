// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{info, warn};

/// 估价请求结果标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuationOutcome {
    Success,
    InvalidUrl,
    UpstreamFailure,
    NormalizationFailure,
    PersistenceFailure,
}

impl ValuationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValuationOutcome::Success => "success",
            ValuationOutcome::InvalidUrl => "invalid_url",
            ValuationOutcome::UpstreamFailure => "upstream_failure",
            ValuationOutcome::NormalizationFailure => "normalization_failure",
            ValuationOutcome::PersistenceFailure => "persistence_failure",
        }
    }
}

/// 启动 Prometheus 导出器
///
/// 未启用时不安装记录器，所有指标调用均为空操作
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!("valuations_total", "Valuation requests by outcome");
    describe_counter!("estimations_created_total", "Estimation records created");
    describe_histogram!(
        "valuation_upstream_seconds",
        "Duration of calls to the external valuation service"
    );

    info!("Metrics exporter listening on {}", addr);
}

pub fn record_valuation(outcome: ValuationOutcome) {
    counter!("valuations_total", "outcome" => outcome.as_str()).increment(1);
}

pub fn record_estimation_created() {
    counter!("estimations_created_total").increment(1);
}

pub fn record_upstream_latency(elapsed: Duration) {
    histogram!("valuation_upstream_seconds").record(elapsed.as_secs_f64());
}
