// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与外部系统的交互。
///
/// 包含的子模块：
/// - 数据库（database）：连接池、迁移与实体映射
/// - 指标（metrics）：Prometheus 导出与估价相关计数
/// - 仓库实现（repositories）：领域仓库接口的具体实现
/// - 估价服务（valuators）：外部AI估价服务的客户端
///
/// 基础设施层依赖领域层的抽象接口，而不是反过来。
pub mod database;
pub mod metrics;
pub mod repositories;
pub mod valuators;
