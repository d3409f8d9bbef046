//! 激励计数器
//!
//! 按 (雇主激励 id, 用户 id) 记录计数和最后一次有效更新时间，
//! 对外提供原子的"读取并递增或归零"操作。

mod memory;

use async_trait::async_trait;
use incentive_shared::error::Result;

pub use memory::{CounterRecord, InMemoryCounter};

/// 计数器接口
///
/// 后端可以替换（数据库事务、Redis 脚本等），但必须满足：
/// - `get_and_increment_count` 对同一个键是原子的读-改-写
/// - 不同键之间互不阻塞
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IncentiveCounter: Send + Sync {
    /// 当前计数，未知的键返回 0
    async fn get_count(&self, subject_id: i64, user_id: i64) -> Result<i64>;

    /// 读取并递增计数
    ///
    /// 1. 记录不存在：创建 (1, now)，返回 1
    /// 2. 距上次有效更新不足去抖间隔：不修改，返回当前计数
    /// 3. `max > 0` 且 `count + 1 >= max`：归零为 (0, 0)，返回 `max`
    /// 4. 否则计数加一并刷新时间，返回新计数
    async fn get_and_increment_count(&self, subject_id: i64, user_id: i64, max: i64)
    -> Result<i64>;

    /// 归零为 (0, 0)，记录不存在时什么也不做
    async fn reset_count(&self, subject_id: i64, user_id: i64) -> Result<()>;
}
