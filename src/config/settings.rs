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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
///
/// 启动时解析一次，之后以 `Arc<Settings>` 的形式共享
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 应用信息
    pub app: AppSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 外部估价服务配置
    pub valuator: ValuatorSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
}

/// 应用信息设置
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// 应用名称，`/info` 返回
    pub name: String,
    /// 应用描述
    pub description: String,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// 是否开放 `/debug-valuate` 调试端点
    pub debug_endpoints: bool,
}

impl ServerSettings {
    /// 监听地址，形如 `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
    /// 是否输出 SQL 日志
    pub sql_logging: bool,
}

/// 外部估价服务（OpenAI Responses API）配置
#[derive(Debug, Clone, Deserialize)]
pub struct ValuatorSettings {
    /// API 密钥，未配置时估价请求直接失败
    pub api_key: Option<String>,
    /// 模型名称
    pub model: String,
    /// API 基础URL
    pub api_base_url: String,
    /// 估价描述使用的语言
    pub language: String,
    /// 单次调用超时时间（秒）
    pub timeout_secs: u64,
}

impl ValuatorSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Prometheus 指标导出配置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    pub enabled: bool,
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 加载顺序：内置默认值 → `config/default` → `config/{APP_ENVIRONMENT}` →
    /// `APPRAISAL__` 前缀的环境变量（以 `__` 分隔层级）
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("APPRAISAL").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 仅使用内置默认值构建配置，不读取文件与环境变量
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::with_defaults()?.build()?.try_deserialize()
    }

    fn with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError>
    {
        Config::builder()
            .set_default("app.name", "Valuation API")?
            .set_default(
                "app.description",
                "API for item valuation and estimation management",
            )?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.debug_endpoints", false)?
            .set_default("database.url", "sqlite://sqlite.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            .set_default("database.sql_logging", false)?
            .set_default("valuator.model", "gpt-4.1-mini")?
            .set_default("valuator.api_base_url", "https://api.openai.com/v1")?
            .set_default("valuator.language", "Polish")?
            .set_default("valuator.timeout_secs", 30)?
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")
    }
}
