// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// URL 语法校验接口
///
/// 纯语法检查，不做DNS解析或网络访问
pub trait UrlValidator: Send + Sync {
    fn is_valid(&self, url: &str) -> bool;
}
