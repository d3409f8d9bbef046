//! 内存计数器
//!
//! 使用 DashMap 的 entry API 实现按键加锁：读-改-写期间持有该键所在分片的写锁，
//! 同一键的并发调用被串行化，不存在全局锁。

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use incentive_shared::config::CounterConfig;
use incentive_shared::error::Result;
use incentive_shared::observability::metrics::COUNTER_INCREMENTS;
use tracing::debug;

use super::IncentiveCounter;
use crate::clock::{Clock, SystemClock};
use crate::validation::require_positive;

/// 计数记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterRecord {
    pub count: i64,
    /// 最后一次有效更新的 Unix 时间戳（秒），归零后为 0
    pub last_update: i64,
}

/// 内存计数器
#[derive(Debug)]
pub struct InMemoryCounter {
    records: DashMap<(i64, i64), CounterRecord>,
    debounce_seconds: i64,
    clock: Arc<dyn Clock>,
}

impl InMemoryCounter {
    /// 使用系统时钟创建计数器
    pub fn new(debounce_interval: Duration) -> Self {
        Self::with_clock(debounce_interval, Arc::new(SystemClock))
    }

    pub fn with_clock(debounce_interval: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            records: DashMap::new(),
            debounce_seconds: i64::try_from(debounce_interval.as_secs()).unwrap_or(i64::MAX),
            clock,
        }
    }

    pub fn from_config(config: &CounterConfig, clock: Arc<dyn Clock>) -> Self {
        Self::with_clock(config.debounce_interval(), clock)
    }

    pub fn debounce_interval(&self) -> Duration {
        Duration::from_secs(self.debounce_seconds as u64)
    }

    fn key(subject_id: i64, user_id: i64) -> Result<(i64, i64)> {
        require_positive("employer_incentive_id", subject_id)?;
        require_positive("user_id", user_id)?;
        Ok((subject_id, user_id))
    }

    /// 查看原始记录（计数与最后更新时间）
    pub fn snapshot(&self, subject_id: i64, user_id: i64) -> Result<Option<CounterRecord>> {
        let key = Self::key(subject_id, user_id)?;
        Ok(self.records.get(&key).map(|record| *record))
    }

    pub fn count(&self, subject_id: i64, user_id: i64) -> Result<i64> {
        Ok(self
            .snapshot(subject_id, user_id)?
            .map(|record| record.count)
            .unwrap_or(0))
    }

    /// 读取并递增（同步版本，trait 实现委托到这里）
    pub fn increment(&self, subject_id: i64, user_id: i64, max: i64) -> Result<i64> {
        let key = Self::key(subject_id, user_id)?;
        let now = self.clock.now_epoch_seconds();

        let (value, result) = match self.records.entry(key) {
            Entry::Vacant(vacant) => {
                vacant.insert(CounterRecord {
                    count: 1,
                    last_update: now,
                });
                (1, "created")
            }
            Entry::Occupied(mut occupied) => {
                let record = occupied.get_mut();

                if now.saturating_sub(record.last_update) < self.debounce_seconds {
                    (record.count, "debounced")
                } else if max > 0 && record.count + 1 >= max {
                    // 到达上限即归零，下一轮重新计数
                    *record = CounterRecord::default();
                    (max, "reset")
                } else {
                    record.count += 1;
                    record.last_update = now;
                    (record.count, "incremented")
                }
            }
        };

        debug!(
            employer_incentive_id = subject_id,
            user_id,
            max,
            value,
            result,
            "计数器已更新"
        );
        metrics::counter!(COUNTER_INCREMENTS, "result" => result).increment(1);

        Ok(value)
    }

    pub fn reset(&self, subject_id: i64, user_id: i64) -> Result<()> {
        let key = Self::key(subject_id, user_id)?;
        if let Some(mut record) = self.records.get_mut(&key) {
            *record = CounterRecord::default();
        }
        Ok(())
    }
}

#[async_trait]
impl IncentiveCounter for InMemoryCounter {
    async fn get_count(&self, subject_id: i64, user_id: i64) -> Result<i64> {
        self.count(subject_id, user_id)
    }

    async fn get_and_increment_count(
        &self,
        subject_id: i64,
        user_id: i64,
        max: i64,
    ) -> Result<i64> {
        self.increment(subject_id, user_id, max)
    }

    async fn reset_count(&self, subject_id: i64, user_id: i64) -> Result<()> {
        self.reset(subject_id, user_id)
    }
}
