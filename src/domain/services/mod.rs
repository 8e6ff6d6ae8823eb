// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 估价结果规范化（valuation_normalizer）：把外部服务不可信的原始负载校验并转换为强类型结果，无任何I/O
/// - 估价接口（valuator）：外部估价服务的能力抽象
/// - URL校验接口（url_validator）：图片URL的语法校验抽象
pub mod url_validator;
pub mod valuation_normalizer;
pub mod valuator;
