// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 编排领域对象完成具体业务流程，并定义对外的数据传输对象
pub mod dto;
pub mod use_cases;
