//! 激励事件处理引擎
//!
//! 将"用户完成了某个行为"的事件延迟到队列中，由处理器异步地与雇主配置的
//! 激励计划进行匹配，满足触发条件时发出奖励信号：
//! - 事件队列：FIFO，负责根据原始触发参数创建并校验事件
//! - 计数器：按 (雇主激励, 用户) 计数，支持到达上限自动归零和时间去抖
//! - 奖励动作：策略模式，阈值计数与立即发放两种实现
//! - 处理器：逐个消费事件，单个事件失败不影响后续事件，首次奖励即返回

pub mod action;
pub mod clock;
pub mod counter;
pub mod employer_incentive;
pub mod models;
pub mod processor;
pub mod queue;
pub mod repository;
pub mod test_utils;
pub mod validation;
pub mod visitor;

pub use action::{AwardAction, ImmediateAction, ThresholdAction};
pub use clock::{Clock, ManualClock, SystemClock};
pub use counter::{CounterRecord, InMemoryCounter, IncentiveCounter};
pub use employer_incentive::EmployerIncentive;
pub use models::{ActionOutcome, Award, AwardReason, ImmutableIncentive, Incentive, IncentiveEvent};
pub use processor::{DrainReport, FailureSink, IncentiveProcessor, RunOutcome, TracingFailureSink};
pub use queue::{InMemoryQueue, IncentiveQueue};
pub use repository::{
    ActionMap, EmployerIncentiveLink, EmployerIncentiveRepository, InMemoryEmployerIncentiveRepository,
    InMemoryIncentiveRepository, IncentiveRecord, IncentiveRepository,
};
pub use visitor::{EventLogVisitor, QueueingVisitor};

pub use incentive_shared::error::{IncentiveError, Result};
