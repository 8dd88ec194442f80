// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::domain::models::operand::Operand;
use crate::domain::models::sum::{SumRequest, SumResponse};

/// 求和领域错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SumError {
    /// 浮点结果溢出为无穷大，无法用 JSON 数字表示
    #[error("sum of {a} and {b} is not representable as a finite number")]
    NonFiniteResult { a: Operand, b: Operand },
}

/// 求和服务
///
/// 无状态、无副作用，可在任意多个请求间共享并发调用
#[derive(Debug, Clone, Copy, Default)]
pub struct SumService;

impl SumService {
    pub fn new() -> Self {
        Self
    }

    /// 计算 `a + b`
    ///
    /// # 参数
    ///
    /// * `request` - 已校验的求和请求
    ///
    /// # 返回值
    ///
    /// * `Ok(SumResponse)` - 求和结果
    /// * `Err(SumError)` - 结果不是有限数
    pub fn sum(&self, request: SumRequest) -> Result<SumResponse, SumError> {
        let answer = request.a + request.b;
        if !answer.is_finite() {
            return Err(SumError::NonFiniteResult {
                a: request.a,
                b: request.b,
            });
        }
        Ok(SumResponse { answer })
    }
}
