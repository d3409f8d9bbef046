use std::sync::Arc;

use async_trait::async_trait;
use incentive_shared::error::Result;

use super::AwardAction;
use crate::clock::{Clock, SystemClock};
use crate::models::{ActionOutcome, Award, AwardReason, IncentiveEvent};

/// 立即发放动作
///
/// 单次行为即满足条件（例如"用户报告了新生儿"），无需计数。
#[derive(Debug, Clone)]
pub struct ImmediateAction {
    clock: Arc<dyn Clock>,
}

impl ImmediateAction {
    /// 使用系统时钟记录发放时间
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for ImmediateAction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AwardAction for ImmediateAction {
    fn kind(&self) -> &'static str {
        "immediate"
    }

    async fn execute(&self, event: &IncentiveEvent) -> Result<ActionOutcome> {
        event.validate()?;
        Ok(ActionOutcome::Awarded(Award::for_event(
            event,
            AwardReason::Immediate,
            self.clock.now(),
        )))
    }
}
