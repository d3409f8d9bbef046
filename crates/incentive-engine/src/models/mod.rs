//! 领域模型
//!
//! - `Incentive`：雇主可采用的激励计划定义
//! - `IncentiveEvent`：用户行为事件，入队时创建、处理器消费一次
//! - `ActionOutcome` / `Award`：奖励动作的执行结果

mod award;
mod event;
mod incentive;

pub use award::{ActionOutcome, Award, AwardReason};
pub use event::IncentiveEvent;
pub use incentive::{ImmutableIncentive, Incentive};
