//! 时钟抽象
//!
//! 计数器的去抖依赖墙上时钟。生产环境使用系统时钟，测试注入 `ManualClock`
//! 以获得确定性的时间推进，无需 sleep。

use std::fmt::Debug;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};

/// 时钟，返回 Unix 时间戳（秒）
pub trait Clock: Send + Sync + Debug {
    fn now_epoch_seconds(&self) -> i64;

    /// 当前时间，精确到秒
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.now_epoch_seconds(), 0).unwrap_or_default()
    }
}

/// 系统时钟
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// 手动推进的时钟
#[derive(Debug)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    /// 2024-01-01T00:00:00Z，远离 0 点，避免与"已归零"的最后更新时间混淆
    pub const DEFAULT_START: i64 = 1_704_067_200;

    pub fn new(start_epoch_seconds: i64) -> Self {
        Self {
            now: AtomicI64::new(start_epoch_seconds),
        }
    }

    /// 时间前进指定时长
    pub fn advance(&self, by: Duration) {
        let seconds = i64::try_from(by.as_secs()).unwrap_or(i64::MAX);
        let _ = self
            .now
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| {
                Some(now.saturating_add(seconds))
            });
    }

    pub fn set(&self, epoch_seconds: i64) {
        self.now.store(epoch_seconds, Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_START)
    }
}

impl Clock for ManualClock {
    fn now_epoch_seconds(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}
