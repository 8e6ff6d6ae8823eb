// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use url::Url;

use crate::domain::services::url_validator::UrlValidator;

/// 图片URL语法校验器
///
/// 要求 http/https 协议且主机名非空，不做DNS解析
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntacticUrlValidator;

impl UrlValidator for SyntacticUrlValidator {
    fn is_valid(&self, url: &str) -> bool {
        is_valid_url(url)
    }
}

/// 检查URL是否为带主机名的 http/https 地址
pub fn is_valid_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url.trim()) else {
        return false;
    };

    matches!(parsed.scheme(), "http" | "https")
        && parsed.host_str().is_some_and(|host| !host.is_empty())
}
