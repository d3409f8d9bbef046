//! 共享库
//!
//! 包含激励引擎各组件共用的错误类型、配置加载以及日志/指标初始化代码。

pub mod config;
pub mod error;
pub mod observability;
