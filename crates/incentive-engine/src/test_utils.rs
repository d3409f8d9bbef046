//! 测试工具模块
//!
//! 提供单元测试、集成测试和基准测试共用的演示数据与组装函数。

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use incentive_shared::error::{IncentiveError, Result};
use parking_lot::Mutex;

use crate::action::{ImmediateAction, ThresholdAction};
use crate::clock::{Clock, ManualClock};
use crate::counter::{InMemoryCounter, IncentiveCounter};
use crate::models::IncentiveEvent;
use crate::processor::{FailureSink, IncentiveProcessor};
use crate::queue::InMemoryQueue;
use crate::repository::{
    ActionMap, EmployerIncentiveLink, InMemoryEmployerIncentiveRepository,
    InMemoryIncentiveRepository, IncentiveRecord,
};

// ==================== 演示数据 ====================

/// 连续 5 天记录数据的激励名称
pub const SEQUENTIAL_DAYS_EVENT: &str = "data-logged-5-sequential-days";
/// 报告新生儿的激励名称
pub const USER_BIRTH_EVENT: &str = "user-birth";
/// 连续记录激励需要的次数
pub const SEQUENTIAL_DAYS_REQUIRED: i64 = 5;

/// 演示激励计划表
pub fn demo_incentive_table() -> HashMap<i64, IncentiveRecord> {
    HashMap::from([
        (
            1,
            IncentiveRecord::new(
                SEQUENTIAL_DAYS_EVENT,
                "The user has logged data five days in a row",
                true,
            ),
        ),
        (
            2,
            IncentiveRecord::new(USER_BIRTH_EVENT, "The user has reported a birth", true),
        ),
    ])
}

/// 演示雇主激励关联表：雇主 1 采用了两个激励计划
pub fn demo_link_table() -> HashMap<i64, EmployerIncentiveLink> {
    HashMap::from([
        (1, EmployerIncentiveLink::new(1, 1)),
        (2, EmployerIncentiveLink::new(1, 2)),
    ])
}

/// 演示动作映射：连续记录使用阈值计数，新生儿立即发放
pub fn demo_action_map(
    counter: Arc<dyn IncentiveCounter>,
    clock: Arc<dyn Clock>,
) -> Result<ActionMap> {
    let threshold =
        ThresholdAction::new(SEQUENTIAL_DAYS_REQUIRED, counter)?.with_clock(clock.clone());
    ActionMap::new()
        .with_actions(SEQUENTIAL_DAYS_EVENT, vec![Arc::new(threshold)])?
        .with_actions(
            USER_BIRTH_EVENT,
            vec![Arc::new(ImmediateAction::with_clock(clock))],
        )
}

// ==================== 失败记录 ====================

/// 把处理器跳过的事件保存在内存中，便于断言
#[derive(Debug, Default)]
pub struct RecordingFailureSink {
    failures: Mutex<Vec<(IncentiveEvent, IncentiveError)>>,
}

impl RecordingFailureSink {
    pub fn failures(&self) -> Vec<(IncentiveEvent, IncentiveError)> {
        self.failures.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.failures.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.lock().is_empty()
    }
}

impl FailureSink for RecordingFailureSink {
    fn record(&self, event: &IncentiveEvent, error: &IncentiveError) {
        self.failures.lock().push((event.clone(), error.clone()));
    }
}

// ==================== 组装 ====================

/// 按演示数据组装好的完整处理链路
pub struct DemoPipeline {
    pub clock: Arc<ManualClock>,
    pub counter: Arc<InMemoryCounter>,
    pub incentives: Arc<InMemoryIncentiveRepository>,
    pub repository: Arc<InMemoryEmployerIncentiveRepository>,
    pub queue: Arc<InMemoryQueue>,
    pub processor: IncentiveProcessor,
    pub failures: Arc<RecordingFailureSink>,
}

/// 组装演示链路
///
/// 计数器和奖励动作共用一个 `ManualClock`，测试通过 `clock.advance` 控制去抖窗口。
pub fn demo_pipeline(debounce_interval: Duration) -> Result<DemoPipeline> {
    let clock = Arc::new(ManualClock::default());
    let counter = Arc::new(InMemoryCounter::with_clock(debounce_interval, clock.clone()));
    let incentives = Arc::new(InMemoryIncentiveRepository::new(demo_incentive_table()));
    let repository = Arc::new(InMemoryEmployerIncentiveRepository::new(
        incentives.clone(),
        demo_link_table(),
        demo_action_map(counter.clone(), clock.clone())?,
    ));
    let queue = Arc::new(InMemoryQueue::new(repository.clone()));
    let failures = Arc::new(RecordingFailureSink::default());
    let processor = IncentiveProcessor::new(queue.clone(), repository.clone())
        .with_failure_sink(failures.clone());

    Ok(DemoPipeline {
        clock,
        counter,
        incentives,
        repository,
        queue,
        processor,
        failures,
    })
}
