//! 统一可观测性模块
//!
//! 提供日志和指标描述的统一初始化入口。引擎本身只通过 `tracing` 和 `metrics`
//! 门面输出，具体的订阅者和导出器由宿主进程决定。

pub mod metrics;
pub mod tracing;

use ::tracing::info;
use anyhow::Result;

use crate::config::ObservabilityConfig;

/// 统一初始化可观测性
///
/// 初始化顺序：
/// 1. Tracing（日志）
/// 2. Metrics（指标描述）
///
/// # Example
///
/// ```ignore
/// use incentive_shared::config::AppConfig;
/// use incentive_shared::observability;
///
/// let config = AppConfig::load("incentive-processor")?;
/// observability::init(&config.service_name, &config.observability)?;
/// ```
pub fn init(service_name: &str, config: &ObservabilityConfig) -> Result<()> {
    tracing::init(config)?;
    metrics::describe_metrics();

    info!(
        service = %service_name,
        log_level = %config.log_level,
        log_format = %config.log_format,
        "Observability initialized"
    );

    Ok(())
}
