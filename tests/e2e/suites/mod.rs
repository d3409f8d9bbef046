//! 测试套件模块
//!
//! 按业务功能组织的测试用例集合。

pub mod administration;
pub mod event_trigger;
pub mod failure_isolation;
