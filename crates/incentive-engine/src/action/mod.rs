//! 奖励动作
//!
//! 策略模式：每个动作检查一个事件并决定是否发放奖励。动作对象是不可变的，
//! 通过 `Arc` 在多个雇主激励和多个事件之间共享。

mod immediate;
mod threshold;

use async_trait::async_trait;
use incentive_shared::error::Result;

use crate::models::{ActionOutcome, IncentiveEvent};

pub use immediate::ImmediateAction;
pub use threshold::ThresholdAction;

/// 奖励动作 Trait
///
/// 实现必须先调用 `event.validate()` 并原样传播验证错误，然后再执行业务逻辑。
/// 满足条件时返回 `ActionOutcome::Awarded`，未满足返回 `ActionOutcome::Continue`。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AwardAction: Send + Sync {
    /// 动作类型名称，用于日志
    fn kind(&self) -> &'static str;

    async fn execute(&self, event: &IncentiveEvent) -> Result<ActionOutcome>;
}
