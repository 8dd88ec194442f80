// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::infrastructure::metrics;
use crate::presentation::errors::AppError;

/// 请求体结构错误
#[derive(Error, Debug)]
pub enum BodyError {
    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("malformed request body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// JSON 对象请求体提取器
///
/// 与 `axum::Json` 相同，但所有拒绝都转换为统一的 JSON 错误响应，
/// 并且要求请求体是 JSON 对象（数组不会被按位置映射到字段）
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => value,
            Err(rejection) => {
                debug!(status = %rejection.status(), "rejected request body: {}", rejection.body_text());
                metrics::record_rejection("invalid_body");
                return Err(AppError::from(rejection));
            }
        };

        if !value.is_object() {
            metrics::record_rejection("invalid_body");
            return Err(AppError::from(BodyError::NotAnObject));
        }

        serde_json::from_value(value).map(JsonBody).map_err(|e| {
            metrics::record_rejection("invalid_body");
            AppError::from(BodyError::from(e))
        })
    }
}
