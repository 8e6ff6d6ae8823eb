// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// - 估价流程（valuation_pipeline）：校验URL、调用估价服务、规范化并持久化
pub mod valuation_pipeline;
