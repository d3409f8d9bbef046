use std::sync::Arc;

use async_trait::async_trait;
use incentive_shared::error::{IncentiveError, Result};
use tracing::debug;

use super::AwardAction;
use crate::clock::{Clock, SystemClock};
use crate::counter::IncentiveCounter;
use crate::models::{ActionOutcome, Award, AwardReason, IncentiveEvent};

/// 阈值计数动作
///
/// 每个事件让 (雇主激励, 用户) 的计数器加一，计数到达 `actions_to_award` 时发放奖励。
/// 计数器的去抖间隔决定了"多久算一次"，例如连续 5 天记录数据。
pub struct ThresholdAction {
    actions_to_award: i64,
    counter: Arc<dyn IncentiveCounter>,
    clock: Arc<dyn Clock>,
}

impl ThresholdAction {
    /// `actions_to_award` 至少为 2，只需一次就发放的场景请使用 `ImmediateAction`
    pub fn new(actions_to_award: i64, counter: Arc<dyn IncentiveCounter>) -> Result<Self> {
        if actions_to_award < 2 {
            return Err(IncentiveError::invalid_argument(
                "actions_to_award",
                format!("最小值为 2，实际为 {actions_to_award}"),
            ));
        }

        Ok(Self {
            actions_to_award,
            counter,
            clock: Arc::new(SystemClock),
        })
    }

    /// 发放时间取自给定时钟，通常与计数器共用同一个
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn actions_to_award(&self) -> i64 {
        self.actions_to_award
    }
}

#[async_trait]
impl AwardAction for ThresholdAction {
    fn kind(&self) -> &'static str {
        "threshold"
    }

    async fn execute(&self, event: &IncentiveEvent) -> Result<ActionOutcome> {
        event.validate()?;

        let current = self
            .counter
            .get_and_increment_count(
                event.employer_incentive_id(),
                event.user_id(),
                self.actions_to_award,
            )
            .await?;

        if current >= self.actions_to_award {
            return Ok(ActionOutcome::Awarded(Award::for_event(
                event,
                AwardReason::ThresholdReached {
                    count: current,
                    required: self.actions_to_award,
                },
                self.clock.now(),
            )));
        }

        debug!(
            employer_incentive_id = event.employer_incentive_id(),
            user_id = event.user_id(),
            current,
            required = self.actions_to_award,
            "尚未达到发放阈值"
        );
        Ok(ActionOutcome::Continue)
    }
}
