// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：估价记录与估价结果
/// - 仓库接口（repositories）：估价记录的持久化抽象
/// - 服务（services）：估价结果规范化以及外部协作方接口
///
/// 领域层不依赖任何外部实现。
pub mod models;
pub mod repositories;
pub mod services;
