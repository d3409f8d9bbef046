//! 数据记录访问者
//!
//! 挂在现有的数据记录入口上：每当用户记录一条数据，入口调用一次 `process_event`。

use std::sync::Arc;

use async_trait::async_trait;
use incentive_shared::error::{IncentiveError, Result};
use serde_json::Value;
use tracing::debug;

use crate::queue::IncentiveQueue;

/// 数据记录访问者接口
#[async_trait]
pub trait EventLogVisitor: Send + Sync {
    /// 处理一次数据记录
    ///
    /// `context` 可以是被记录的数据或其他相关信息。返回事件是否被接收。
    async fn process_event(
        &self,
        name: &str,
        user_id: i64,
        employer_id: i64,
        context: Value,
    ) -> Result<bool>;
}

/// 将数据记录转为激励事件并入队
pub struct QueueingVisitor {
    queue: Arc<dyn IncentiveQueue>,
}

impl QueueingVisitor {
    pub fn new(queue: Arc<dyn IncentiveQueue>) -> Self {
        Self { queue }
    }
}

#[async_trait]
impl EventLogVisitor for QueueingVisitor {
    async fn process_event(
        &self,
        name: &str,
        user_id: i64,
        employer_id: i64,
        context: Value,
    ) -> Result<bool> {
        let event = match self.queue.create_event(user_id, employer_id, name).await {
            Ok(event) => event,
            // 雇主没有采用与该数据同名的激励，不是错误
            Err(IncentiveError::NotFound { .. }) => {
                debug!(event_name = name, employer_id, "没有匹配的雇主激励，忽略");
                return Ok(false);
            }
            Err(err) => return Err(err),
        };

        debug!(
            employer_incentive_id = event.employer_incentive_id(),
            user_id,
            context = %context,
            "数据记录已转为激励事件"
        );
        self.queue.enqueue(event).await?;
        Ok(true)
    }
}
