//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 计数器配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// 同一 (激励, 用户) 两次有效计数之间的最小间隔（秒），0 表示不做去抖
    pub debounce_interval_seconds: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            // 默认每天最多计数一次
            debounce_interval_seconds: 60 * 60 * 24,
        }
    }
}

impl CounterConfig {
    pub fn debounce_interval(&self) -> Duration {
        Duration::from_secs(self.debounce_interval_seconds)
    }
}

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// 日志输出格式：json（结构化）或 pretty（人类可读）
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl ObservabilityConfig {
    pub fn is_json(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    pub counter: CounterConfig,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 环境由 INCENTIVE_ENV 指定（默认 development），配置目录由 CONFIG_DIR 指定（默认 config）。
    pub fn load(service_name: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("INCENTIVE_ENV").unwrap_or_else(|_| "development".to_string());
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        Self::load_from(Path::new(&config_dir), &env, service_name)
    }

    /// 从指定目录加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. {config_dir}/default.toml（默认配置）
    /// 2. {config_dir}/{environment}.toml（环境特定配置）
    /// 3. {config_dir}/{service_name}.toml（服务特定配置）
    /// 4. 环境变量（INCENTIVE_ 前缀，层级用双下划线分隔，
    ///    如 INCENTIVE_COUNTER__DEBOUNCE_INTERVAL_SECONDS -> counter.debounce_interval_seconds）
    pub fn load_from(
        config_dir: &Path,
        environment: &str,
        service_name: &str,
    ) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", environment)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join(format!("{environment}.toml"))).required(false))
            .add_source(
                File::from(config_dir.join(format!("{service_name}.toml"))).required(false),
            )
            .add_source(
                Environment::with_prefix("INCENTIVE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
