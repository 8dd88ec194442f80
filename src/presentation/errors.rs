// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use validator::ValidationErrors;

use crate::application::usecases::compute_sum::SumUseCaseError;
use crate::presentation::extractors::json_body::BodyError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status_and_body(&self) -> (StatusCode, Value) {
        if let Some(err) = self.0.downcast_ref::<SumUseCaseError>() {
            return match err {
                SumUseCaseError::Validation(errors) => (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "success": false,
                        "error": err.code(),
                        "message": "operands `a` and `b` must both be JSON numbers",
                        "details": field_details(errors),
                    }),
                ),
                SumUseCaseError::Domain(_) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({
                        "success": false,
                        "error": err.code(),
                        "message": err.to_string(),
                    }),
                ),
            };
        }

        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            return (rejection.status(), invalid_body(rejection.body_text()));
        }

        if let Some(err) = self.0.downcast_ref::<BodyError>() {
            return (StatusCode::BAD_REQUEST, invalid_body(err.to_string()));
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({
                "success": false,
                "error": "internal_error",
                "message": self.0.to_string(),
            }),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

fn invalid_body(message: String) -> Value {
    json!({
        "success": false,
        "error": "invalid_body",
        "message": message,
    })
}

/// 字段名 → 错误信息列表，按字段名排序
fn field_details(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
