//! 内存事件队列

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use incentive_shared::error::{IncentiveError, Result};
use parking_lot::Mutex;
use tracing::{debug, instrument};

use super::IncentiveQueue;
use crate::models::IncentiveEvent;
use crate::repository::EmployerIncentiveRepository;

/// 内存 FIFO 队列
///
/// 出队在互斥锁内完成，多个消费者共享同一队列时不会重复投递。
pub struct InMemoryQueue {
    events: Mutex<VecDeque<IncentiveEvent>>,
    repository: Arc<dyn EmployerIncentiveRepository>,
}

impl InMemoryQueue {
    pub fn new(repository: Arc<dyn EmployerIncentiveRepository>) -> Self {
        Self {
            events: Mutex::new(VecDeque::new()),
            repository,
        }
    }

    /// 当前排队的事件数
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl fmt::Debug for InMemoryQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryQueue")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl IncentiveQueue for InMemoryQueue {
    #[instrument(skip(self))]
    async fn create_event(
        &self,
        user_id: i64,
        employer_id: i64,
        event_name: &str,
    ) -> Result<IncentiveEvent> {
        IncentiveEvent::check_trigger(user_id, employer_id, event_name)
            .map_err(IncentiveError::into_validation)?;

        let employer_incentive = self
            .repository
            .get_for_employer_by_event(employer_id, event_name)
            .await?;

        IncentiveEvent::new(user_id, employer_id, employer_incentive.id(), event_name)
            .map_err(IncentiveError::into_validation)
    }

    async fn enqueue(&self, event: IncentiveEvent) -> Result<()> {
        event.validate()?;

        let mut events = self.events.lock();
        debug!(
            employer_incentive_id = event.employer_incentive_id(),
            user_id = event.user_id(),
            event_name = %event.event_name(),
            position = events.len(),
            "事件已入队"
        );
        events.push_back(event);
        Ok(())
    }

    async fn dequeue(&self) -> Result<Option<IncentiveEvent>> {
        Ok(self.events.lock().pop_front())
    }
}
