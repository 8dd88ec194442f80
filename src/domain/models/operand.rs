// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::ops::Add;

/// JSON 整数的表示范围：`i64::MIN ..= u64::MAX`
const INT_MIN: i128 = i64::MIN as i128;
const INT_MAX: i128 = u64::MAX as i128;

/// 数值操作数
///
/// JSON 整数（`i64` 或 `u64`）保存为 `Int`，其余数字（小数、指数）
/// 统一保存为 `Float`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// 整数，取值范围 `i64::MIN ..= u64::MAX`
    Int(i128),
    /// 浮点数
    Float(f64),
}

impl Operand {
    /// 从 JSON 值解析操作数
    ///
    /// 只接受 JSON 数字，字符串、布尔、null、数组和对象都返回 `None`，
    /// 不做任何隐式转换（`"3"` 不是 3）
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => number
                .as_i64()
                .map(i128::from)
                .or_else(|| number.as_u64().map(i128::from))
                .map(Operand::Int)
                .or_else(|| number.as_f64().map(Operand::Float)),
            _ => None,
        }
    }

    /// 按 `f64` 取值
    pub fn as_f64(self) -> f64 {
        match self {
            Operand::Int(value) => value as f64,
            Operand::Float(value) => value,
        }
    }

    /// 是否可以用 JSON 数字表示
    pub fn is_finite(self) -> bool {
        match self {
            Operand::Int(_) => true,
            Operand::Float(value) => value.is_finite(),
        }
    }
}

impl Add for Operand {
    type Output = Operand;

    /// 整数相加保持精确；结果超出 JSON 整数范围时退回 `f64` 运算
    fn add(self, rhs: Operand) -> Operand {
        match (self, rhs) {
            (Operand::Int(lhs), Operand::Int(rhs)) => lhs
                .checked_add(rhs)
                .filter(|sum| (INT_MIN..=INT_MAX).contains(sum))
                .map(Operand::Int)
                .unwrap_or_else(|| Operand::Float(lhs as f64 + rhs as f64)),
            (lhs, rhs) => Operand::Float(lhs.as_f64() + rhs.as_f64()),
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Int(value.into())
    }
}

impl From<u64> for Operand {
    fn from(value: u64) -> Self {
        Operand::Int(value.into())
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Int(value.into())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(value) => write!(f, "{}", value),
            Operand::Float(value) => write!(f, "{}", value),
        }
    }
}

impl Serialize for Operand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Operand::Int(value) => match i64::try_from(value) {
                Ok(signed) => serializer.serialize_i64(signed),
                Err(_) => match u64::try_from(value) {
                    Ok(unsigned) => serializer.serialize_u64(unsigned),
                    Err(_) => serializer.serialize_f64(value as f64),
                },
            },
            Operand::Float(value) => serializer.serialize_f64(value),
        }
    }
}
