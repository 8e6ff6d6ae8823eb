// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 估价记录（estimation）：持久化的物品描述与估值区间，以及分页参数
/// - 估价结果（valuation）：外部服务原始负载与规范化后的瞬态结果
pub mod estimation;
pub mod valuation;
