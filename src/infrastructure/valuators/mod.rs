// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 估价服务实现模块
///
/// 每个模型提供方一个 `Valuator` 实现
pub mod openai_valuator;
