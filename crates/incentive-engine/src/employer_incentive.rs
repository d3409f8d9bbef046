//! 雇主激励
//!
//! 雇主对某个激励计划的采用，绑定一个或多个有序的奖励动作。

use std::fmt;
use std::sync::Arc;

use incentive_shared::error::{IncentiveError, Result};
use tracing::{debug, instrument};

use crate::action::AwardAction;
use crate::models::{ActionOutcome, Incentive, IncentiveEvent};
use crate::validation::require_positive;

/// 雇主激励
pub struct EmployerIncentive {
    id: i64,
    employer_id: i64,
    incentive: Arc<dyn Incentive>,
    actions: Vec<Arc<dyn AwardAction>>,
}

impl EmployerIncentive {
    /// 创建雇主激励
    ///
    /// 激励计划必须已持久化（id >= 1），不允许挂载尚未保存的激励。
    pub fn new(
        id: i64,
        employer_id: i64,
        incentive: Arc<dyn Incentive>,
        actions: Vec<Arc<dyn AwardAction>>,
    ) -> Result<Self> {
        require_positive("id", id)?;
        require_positive("employer_id", employer_id)?;

        if actions.is_empty() {
            return Err(IncentiveError::invalid_argument(
                "actions",
                "至少需要一个奖励动作",
            ));
        }

        incentive.validate()?;
        if !incentive.is_persisted() {
            return Err(IncentiveError::invalid_argument(
                "incentive",
                "未保存的激励计划不能挂载到雇主激励，请先保存",
            ));
        }

        Ok(Self {
            id,
            employer_id,
            incentive,
            actions,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn employer_id(&self) -> i64 {
        self.employer_id
    }

    pub fn incentive(&self) -> &Arc<dyn Incentive> {
        &self.incentive
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// 重新校验挂载的激励计划
    ///
    /// 其余字段在构造时校验且不可变，但激励计划的实现可能是可变的。
    pub fn validate(&self) -> Result<()> {
        self.incentive.validate()
    }

    /// 处理一个事件
    ///
    /// 按构造顺序依次执行动作，遇到第一个发放奖励或出错的动作即停止。
    /// 已执行动作产生的副作用（例如计数器递增）不会回滚。
    #[instrument(
        skip(self, event),
        fields(
            employer_incentive_id = self.id,
            user_id = event.user_id(),
            event_name = %event.event_name()
        )
    )]
    pub async fn process_event(&self, event: &IncentiveEvent) -> Result<ActionOutcome> {
        self.validate()?;
        event.validate()?;

        for (index, action) in self.actions.iter().enumerate() {
            let outcome = action.execute(event).await?;
            if outcome.is_awarded() {
                debug!(index, action = action.kind(), "动作触发奖励");
                return Ok(outcome);
            }
        }

        Ok(ActionOutcome::Continue)
    }
}

impl fmt::Debug for EmployerIncentive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployerIncentive")
            .field("id", &self.id)
            .field("employer_id", &self.employer_id)
            .field("incentive", &self.incentive)
            .field(
                "actions",
                &self.actions.iter().map(|a| a.kind()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
