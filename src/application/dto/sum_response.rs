// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

use crate::domain::models::operand::Operand;
use crate::domain::models::sum::SumResponse;

/// 求和响应数据传输对象
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SumResponseDto {
    pub answer: Operand,
}

impl From<SumResponse> for SumResponseDto {
    fn from(response: SumResponse) -> Self {
        Self {
            answer: response.answer,
        }
    }
}
