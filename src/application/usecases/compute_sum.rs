// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use thiserror::Error;
use validator::ValidationErrors;

use crate::application::dto::sum_request::SumRequestDto;
use crate::application::dto::sum_response::SumResponseDto;
use crate::domain::services::sum_service::{SumError, SumService};

/// 求和用例错误
#[derive(Error, Debug)]
pub enum SumUseCaseError {
    #[error("invalid operands: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Domain(#[from] SumError),
}

impl SumUseCaseError {
    /// 对外暴露的错误码，同时用作指标标签
    pub fn code(&self) -> &'static str {
        match self {
            SumUseCaseError::Validation(_) => "validation_error",
            SumUseCaseError::Domain(SumError::NonFiniteResult { .. }) => "unrepresentable_result",
        }
    }
}

// === Section: Use Case Definition ===

pub struct ComputeSumUseCase {
    service: Arc<SumService>,
}

// === Section: Implementation ===

impl ComputeSumUseCase {
    pub fn new(service: Arc<SumService>) -> Self {
        Self { service }
    }

    /// 校验 → 转换 → 求和
    pub fn execute(&self, request_dto: SumRequestDto) -> Result<SumResponseDto, SumUseCaseError> {
        let request = request_dto.into_domain()?;
        let response = self.service.sum(request)?;
        Ok(response.into())
    }
}
