// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use futures::future::join_all;
use serde_json::json;
use sumrs::presentation::routes;

use super::helpers::post_sum;

/// 并发求和测试
///
/// 多个任务并行调用同一个路由，结果与串行调用一致
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_requests_return_identical_answers() {
    let app = routes::routes();

    let handles = (0..64i64).map(|i| {
        let app = app.clone();
        tokio::spawn(async move {
            let (status, body) = post_sum(app, json!({ "a": i, "b": -2 * i })).await;
            (i, status, body)
        })
    });

    for result in join_all(handles).await {
        let (i, status, body) = result.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "answer": -i }));
    }
}

#[tokio::test]
async fn test_repeated_requests_are_idempotent() {
    let app = routes::routes();

    let first = post_sum(app.clone(), json!({ "a": 21, "b": 21 })).await;
    let second = post_sum(app, json!({ "a": 21, "b": 21 })).await;

    assert_eq!(first, second);
    assert_eq!(first.1["answer"], 42);
}
