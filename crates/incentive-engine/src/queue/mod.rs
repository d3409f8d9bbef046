//! 事件队列
//!
//! 用户行为事件先入队，由处理器稍后消费。队列负责根据原始触发参数解析出
//! 雇主激励并创建事件，保证入队的事件都是合法的。

mod memory;

use async_trait::async_trait;
use incentive_shared::error::Result;

use crate::models::IncentiveEvent;

pub use memory::InMemoryQueue;

/// 事件队列接口
///
/// 实现必须保证 FIFO，且在多个消费者之间出队是原子的（同一事件不会被投递两次）。
#[async_trait]
pub trait IncentiveQueue: Send + Sync {
    /// 根据原始触发参数创建事件
    ///
    /// 字段不合法返回 Validation；雇主没有采用与事件同名的激励计划时返回 NotFound。
    async fn create_event(
        &self,
        user_id: i64,
        employer_id: i64,
        event_name: &str,
    ) -> Result<IncentiveEvent>;

    /// 校验后追加到队尾
    async fn enqueue(&self, event: IncentiveEvent) -> Result<()>;

    /// 取出队首事件，队列为空时返回 `None`
    async fn dequeue(&self) -> Result<Option<IncentiveEvent>>;
}
