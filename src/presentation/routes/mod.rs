// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::domain::services::sum_service::SumService;
use crate::presentation::handlers::sum_handler;

/// 创建应用路由
///
/// 不绑定端口，测试可以直接驱动返回的 `Router`
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let sum_service = Arc::new(SumService::new());

    Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/sum", post(sum_handler::sum))
        .layer(Extension(sum_service))
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
