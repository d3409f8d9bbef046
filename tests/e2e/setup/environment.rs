//! 测试环境管理
//!
//! 每个测试独立组装一条演示链路，互不共享状态。

use std::sync::Once;
use std::time::Duration;

use anyhow::Result;
use incentive_engine::test_utils::{DemoPipeline, demo_pipeline};
use incentive_engine::{IncentiveEvent, IncentiveQueue, RunOutcome};
use incentive_shared::config::ObservabilityConfig;
use incentive_shared::observability;

const ONE_DAY: Duration = Duration::from_secs(60 * 60 * 24);

static TRACING: Once = Once::new();

/// 端到端测试环境
pub struct TestEnvironment {
    pub pipeline: DemoPipeline,
}

impl TestEnvironment {
    /// 不去抖的环境，每个事件都会计数
    pub fn setup() -> Result<Self> {
        Self::with_debounce(Duration::ZERO)
    }

    /// 每天最多计数一次的环境
    pub fn daily() -> Result<Self> {
        Self::with_debounce(ONE_DAY)
    }

    pub fn with_debounce(debounce_interval: Duration) -> Result<Self> {
        TRACING.call_once(|| {
            let config = ObservabilityConfig {
                log_level: "debug".to_string(),
                ..Default::default()
            };
            // 其他测试二进制可能已经安装了订阅者
            let _ = observability::init("incentive-e2e", &config);
        });

        Ok(Self {
            pipeline: demo_pipeline(debounce_interval)?,
        })
    }

    /// 模拟数据记录入口：创建事件并入队
    pub async fn log(
        &self,
        user_id: i64,
        employer_id: i64,
        event_name: &str,
    ) -> Result<IncentiveEvent> {
        let event = self
            .pipeline
            .queue
            .create_event(user_id, employer_id, event_name)
            .await?;
        self.pipeline.queue.enqueue(event.clone()).await?;
        Ok(event)
    }

    /// 连续记录多次
    pub async fn log_times(
        &self,
        times: usize,
        user_id: i64,
        employer_id: i64,
        event_name: &str,
    ) -> Result<()> {
        for _ in 0..times {
            self.log(user_id, employer_id, event_name).await?;
        }
        Ok(())
    }

    /// 排空一次队列
    pub async fn run(&self) -> Result<RunOutcome> {
        Ok(self.pipeline.processor.run().await?)
    }

    /// 一次记录一个事件并立即处理，返回每次的结果
    pub async fn log_and_run(
        &self,
        times: usize,
        user_id: i64,
        employer_id: i64,
        event_name: &str,
    ) -> Result<Vec<RunOutcome>> {
        let mut outcomes = Vec::with_capacity(times);
        for _ in 0..times {
            self.log(user_id, employer_id, event_name).await?;
            outcomes.push(self.run().await?);
        }
        Ok(outcomes)
    }

    pub fn advance_days(&self, days: u32) {
        self.pipeline.clock.advance(ONE_DAY * days);
    }
}
