// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::extract::{Extension, Json};
use tracing::debug;

use crate::{
    application::{
        dto::{sum_request::SumRequestDto, sum_response::SumResponseDto},
        usecases::compute_sum::ComputeSumUseCase,
    },
    domain::services::sum_service::SumService,
    infrastructure::metrics,
    presentation::{errors::AppError, extractors::json_body::JsonBody},
};

/// 处理求和请求
///
/// # 参数
///
/// * `service` - 求和服务实例
/// * `payload` - 求和请求数据
///
/// # 返回值
///
/// 成功时返回 `200` 和 `{"answer": a + b}`
///
/// # 错误
///
/// - 操作数缺失或不是数字：`400`
/// - 结果无法用 JSON 数字表示：`422`
pub async fn sum(
    Extension(service): Extension<Arc<SumService>>,
    JsonBody(payload): JsonBody<SumRequestDto>,
) -> Result<Json<SumResponseDto>, AppError> {
    metrics::record_sum_request();

    let use_case = ComputeSumUseCase::new(service);
    match use_case.execute(payload) {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            debug!(error = %e, "sum request rejected");
            metrics::record_rejection(e.code());
            Err(e.into())
        }
    }
}
