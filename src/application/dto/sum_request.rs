// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::models::operand::Operand;
use crate::domain::models::sum::SumRequest;

/// 求和请求数据传输对象
///
/// 操作数保留原始 JSON 值，缺失、null 或非数字的情况统一交给校验处理，
/// 而不是在反序列化阶段被拒绝或被当作 0
#[derive(Debug, Deserialize, Validate)]
pub struct SumRequestDto {
    /// 第一个操作数
    #[validate(
        required(message = "operand `a` is required"),
        custom(function = "numeric_operand")
    )]
    pub a: Option<Value>,
    /// 第二个操作数
    #[validate(
        required(message = "operand `b` is required"),
        custom(function = "numeric_operand")
    )]
    pub b: Option<Value>,
}

impl SumRequestDto {
    /// 校验并转换为领域请求
    ///
    /// # 返回值
    ///
    /// * `Ok(SumRequest)` - 两个操作数均为数字
    /// * `Err(ValidationErrors)` - 按字段列出的校验错误
    pub fn into_domain(self) -> Result<SumRequest, ValidationErrors> {
        self.validate()?;
        Ok(SumRequest {
            a: operand_of("a", self.a.as_ref())?,
            b: operand_of("b", self.b.as_ref())?,
        })
    }
}

fn numeric_operand(value: &Value) -> Result<(), ValidationError> {
    if Operand::from_json(value).is_some() {
        return Ok(());
    }
    let mut error = ValidationError::new("numeric");
    error.message = Some(Cow::Borrowed("operand must be a JSON number"));
    error.add_param(Cow::Borrowed("found"), &json_kind(value));
    Err(error)
}

fn operand_of(field: &'static str, value: Option<&Value>) -> Result<Operand, ValidationErrors> {
    value.and_then(Operand::from_json).ok_or_else(|| {
        let mut errors = ValidationErrors::new();
        errors.add(field, ValidationError::new("numeric"));
        errors
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
