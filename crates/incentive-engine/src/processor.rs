//! 事件处理器
//!
//! 逐个消费队列中的事件，找到对应的雇主激励并执行其奖励动作。
//!
//! 状态只有两种：排空中（Running）和空闲（Idle）。队列为空时 `run` 正常返回；
//! 第一次发放奖励时立即返回给调用方，剩余事件保留在队列中等待下一次 `run`。
//! 单个事件的未找到或验证失败只会被记录并跳过，不会中断排空。

use std::sync::Arc;

use incentive_shared::error::{IncentiveError, Result};
use incentive_shared::observability::metrics::{AWARDS, EVENTS_DEQUEUED, EVENTS_SKIPPED};
use tracing::{debug, info, instrument, warn};

use crate::models::{ActionOutcome, Award, IncentiveEvent};
use crate::queue::IncentiveQueue;
use crate::repository::EmployerIncentiveRepository;

/// 处理失败记录器
///
/// 处理器跳过的事件会交给它，用于审计或告警。
pub trait FailureSink: Send + Sync {
    fn record(&self, event: &IncentiveEvent, error: &IncentiveError);
}

/// 默认实现：以 warn 级别写日志
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingFailureSink;

impl FailureSink for TracingFailureSink {
    fn record(&self, event: &IncentiveEvent, error: &IncentiveError) {
        warn!(
            employer_incentive_id = event.employer_incentive_id(),
            employer_id = event.employer_id(),
            user_id = event.user_id(),
            event_name = %event.event_name(),
            error_code = error.code(),
            error = %error,
            "事件处理失败，已跳过"
        );
    }
}

/// 一次排空的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// 出队的事件数（包含触发奖励的那一个）
    pub processed: usize,
    /// 因未找到或验证失败而跳过的事件数
    pub skipped: usize,
}

/// `run` 的结果
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// 队列已排空，没有任何事件触发奖励
    Exhausted(DrainReport),
    /// 某个事件触发了奖励，排空提前结束
    Awarded { award: Award, report: DrainReport },
}

impl RunOutcome {
    pub fn is_awarded(&self) -> bool {
        matches!(self, Self::Awarded { .. })
    }

    pub fn award(&self) -> Option<&Award> {
        match self {
            Self::Awarded { award, .. } => Some(award),
            Self::Exhausted(_) => None,
        }
    }

    pub fn report(&self) -> DrainReport {
        match self {
            Self::Exhausted(report) | Self::Awarded { report, .. } => *report,
        }
    }
}

/// 激励事件处理器
pub struct IncentiveProcessor {
    queue: Arc<dyn IncentiveQueue>,
    repository: Arc<dyn EmployerIncentiveRepository>,
    failure_sink: Arc<dyn FailureSink>,
}

impl IncentiveProcessor {
    pub fn new(
        queue: Arc<dyn IncentiveQueue>,
        repository: Arc<dyn EmployerIncentiveRepository>,
    ) -> Self {
        Self {
            queue,
            repository,
            failure_sink: Arc::new(TracingFailureSink),
        }
    }

    /// 替换失败记录器
    pub fn with_failure_sink(mut self, failure_sink: Arc<dyn FailureSink>) -> Self {
        self.failure_sink = failure_sink;
        self
    }

    /// 排空队列，直到队列为空或第一次发放奖励
    ///
    /// 参数错误和内部错误不属于单个事件的可恢复失败，会直接返回 `Err`，
    /// 此时出错的事件已经出队。
    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<RunOutcome> {
        let mut report = DrainReport::default();

        while let Some(event) = self.queue.dequeue().await? {
            report.processed += 1;
            metrics::counter!(EVENTS_DEQUEUED).increment(1);

            match self.handle(&event).await {
                Ok(ActionOutcome::Continue) => {}
                Ok(ActionOutcome::Awarded(award)) => {
                    metrics::counter!(AWARDS, "reason" => award.reason.label()).increment(1);
                    info!(
                        award_id = %award.award_id,
                        employer_incentive_id = award.employer_incentive_id,
                        user_id = award.user_id,
                        reason = award.reason.label(),
                        processed = report.processed,
                        "激励条件已满足，发放奖励"
                    );
                    return Ok(RunOutcome::Awarded { award, report });
                }
                Err(err) if err.is_recoverable() => {
                    report.skipped += 1;
                    metrics::counter!(EVENTS_SKIPPED, "reason" => err.code()).increment(1);
                    self.failure_sink.record(&event, &err);
                }
                Err(err) => return Err(err),
            }
        }

        debug!(
            processed = report.processed,
            skipped = report.skipped,
            "队列已排空"
        );
        Ok(RunOutcome::Exhausted(report))
    }

    async fn handle(&self, event: &IncentiveEvent) -> Result<ActionOutcome> {
        let employer_incentive = self.repository.get_for_event(event).await?;
        employer_incentive.process_event(event).await
    }
}
