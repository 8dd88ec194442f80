// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含应用程序的用例实现
/// 负责把传输层的数据传输对象转换为领域请求
pub mod dto;
pub mod usecases;
