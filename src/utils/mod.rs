// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// - 遥测（telemetry）：日志订阅器初始化
/// - 校验（validators）：图片URL语法校验
pub mod telemetry;
pub mod validators;
