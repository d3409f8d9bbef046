use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::IncentiveEvent;

/// 奖励原因
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AwardReason {
    /// 计数达到阈值
    ThresholdReached { count: i64, required: i64 },
    /// 单次行为即触发
    Immediate,
}

impl AwardReason {
    /// 指标标签
    pub fn label(&self) -> &'static str {
        match self {
            Self::ThresholdReached { .. } => "threshold_reached",
            Self::Immediate => "immediate",
        }
    }
}

/// 奖励信号
///
/// 表示某个事件使激励条件得到满足。它不是错误，而是处理结果的一种。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    /// 奖励唯一标识（UUID v7，时间有序）
    pub award_id: String,
    pub employer_incentive_id: i64,
    pub employer_id: i64,
    pub user_id: i64,
    pub event_name: String,
    pub reason: AwardReason,
    pub awarded_at: DateTime<Utc>,
}

impl Award {
    /// `awarded_at` 由调用方的时钟提供
    pub fn for_event(
        event: &IncentiveEvent,
        reason: AwardReason,
        awarded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            award_id: Uuid::now_v7().to_string(),
            employer_incentive_id: event.employer_incentive_id(),
            employer_id: event.employer_id(),
            user_id: event.user_id(),
            event_name: event.event_name().to_string(),
            reason,
            awarded_at,
        }
    }
}

/// 奖励动作的执行结果
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// 条件尚未满足，继续执行后续动作
    Continue,
    /// 条件满足，立即停止
    Awarded(Award),
}

impl ActionOutcome {
    pub fn is_awarded(&self) -> bool {
        matches!(self, Self::Awarded(_))
    }

    pub fn into_award(self) -> Option<Award> {
        match self {
            Self::Awarded(award) => Some(award),
            Self::Continue => None,
        }
    }
}
