// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

use crate::config::settings::MetricsSettings;

pub const SUM_REQUESTS_TOTAL: &str = "sum_requests_total";
pub const SUM_REQUESTS_REJECTED_TOTAL: &str = "sum_requests_rejected_total";

/// 初始化指标系统
///
/// 安装 Prometheus 导出器并注册求和服务的计数器。
/// 未安装导出器时，计数器调用为空操作
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!(
                "Invalid metrics listen address {}: {}. Metrics exporter not started.",
                settings.listen_addr, e
            );
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(SUM_REQUESTS_TOTAL, "Total number of sum requests with a parseable body");
    describe_counter!(
        SUM_REQUESTS_REJECTED_TOTAL,
        "Total number of rejected sum requests, labelled by reason"
    );

    info!("Metrics exporter listening on {}", addr);
}

pub fn record_sum_request() {
    counter!(SUM_REQUESTS_TOTAL).increment(1);
}

pub fn record_rejection(reason: &'static str) {
    counter!(SUM_REQUESTS_REJECTED_TOTAL, "reason" => reason).increment(1);
}
