// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 每个处理器只负责协议适配，业务逻辑在用例和领域服务中
pub mod sum_handler;
