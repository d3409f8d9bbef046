//! 激励引擎端到端测试
//!
//! 使用内存仓储和手动时钟组装完整链路，覆盖：
//! - 事件触发奖励（阈值计数、立即发放）
//! - 去抖与计数器循环
//! - 单个事件失败的隔离
//! - 激励计划与雇主激励的管理

pub mod helpers;
pub mod setup;
pub mod suites;

pub use setup::TestEnvironment;
