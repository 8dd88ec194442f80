// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::operand::Operand;

/// 求和请求
///
/// 两个操作数均已通过校验；每个请求相互独立、无状态
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumRequest {
    pub a: Operand,
    pub b: Operand,
}

impl SumRequest {
    pub fn new(a: impl Into<Operand>, b: impl Into<Operand>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

/// 求和结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumResponse {
    /// `a + b`
    pub answer: Operand,
}
