// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 每个处理器负责一类端点：估价、估价记录管理、应用信息
pub mod estimation_handler;
pub mod info_handler;
pub mod valuation_handler;
