// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use axum_test::TestServer;
use serde_json::Value;
use tower::util::ServiceExt;

/// 创建测试服务器
///
/// 使用与生产相同的路由，但不绑定端口
pub fn test_server() -> TestServer {
    TestServer::new(sumrs::presentation::routes::routes()).unwrap()
}

/// 通过 `oneshot` 发送一次 `POST /sum`，返回状态码和 JSON 响应体
pub async fn post_sum(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri("/sum")
                .method("POST")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
