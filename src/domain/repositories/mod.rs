// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义领域层的持久化抽象，具体实现由基础设施层提供，
/// 领域层与应用层因此不依赖具体的数据库技术。
pub mod estimation_repository;
