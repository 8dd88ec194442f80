// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 包含操作数和求和请求/响应等核心领域实体
pub mod operand;
pub mod sum;
