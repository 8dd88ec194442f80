// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：操作数与求和请求/响应
/// - 服务（services）：纯求和计算
///
/// 领域层不依赖于传输层、配置或日志，
/// 相同输入总是得到相同输出。
pub mod models;
pub mod services;
