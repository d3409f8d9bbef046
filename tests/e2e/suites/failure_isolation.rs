//! 失败隔离测试套件
//!
//! 单个事件找不到雇主激励时只跳过该事件，不影响后续事件。

use crate::setup::TestEnvironment;
use incentive_engine::test_utils::{SEQUENTIAL_DAYS_EVENT, USER_BIRTH_EVENT};
use incentive_engine::{IncentiveError, IncentiveEvent, IncentiveQueue};

#[cfg(test)]
mod create_event_tests {
    use super::*;

    /// 入队时找不到雇主激励，错误直接返回给调用方
    #[tokio::test]
    async fn test_unknown_employer_is_not_found() {
        let env = TestEnvironment::setup().unwrap();

        let err = env.log(1, 9, USER_BIRTH_EVENT).await.unwrap_err();
        let err = err.downcast::<IncentiveError>().unwrap();
        assert!(matches!(err, IncentiveError::NotFound { .. }));
        assert!(env.pipeline.queue.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_event_name_is_validation_error() {
        let env = TestEnvironment::setup().unwrap();

        let err = env.log(1, 1, "user birth").await.unwrap_err();
        let err = err.downcast::<IncentiveError>().unwrap();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }
}

#[cfg(test)]
mod processor_tests {
    use super::*;

    /// 指向不存在的雇主激励的事件被跳过，后续事件照常处理
    #[tokio::test]
    async fn test_stale_event_is_skipped() {
        let env = TestEnvironment::setup().unwrap();
        let stale = IncentiveEvent::new(1, 1, 42, USER_BIRTH_EVENT).unwrap();
        env.pipeline.queue.enqueue(stale.clone()).await.unwrap();
        env.log(1, 1, USER_BIRTH_EVENT).await.unwrap();

        let outcome = env.run().await.unwrap();
        crate::assert_awarded!(outcome, 1, 2);
        assert_eq!(outcome.report().skipped, 1);

        let failures = env.pipeline.failures.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, stale);
        assert_eq!(failures[0].1.code(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_only_failures_exhaust_queue() {
        let env = TestEnvironment::setup().unwrap();
        for link_id in [40, 41, 42] {
            let event = IncentiveEvent::new(1, 1, link_id, SEQUENTIAL_DAYS_EVENT).unwrap();
            env.pipeline.queue.enqueue(event).await.unwrap();
        }

        let outcome = env.run().await.unwrap();
        crate::assert_not_awarded!(outcome);
        assert_eq!(outcome.report().processed, 3);
        assert_eq!(outcome.report().skipped, 3);
        assert_eq!(env.pipeline.failures.len(), 3);
    }

    /// 跳过的事件不会推进计数器
    #[tokio::test]
    async fn test_skipped_event_does_not_count() {
        let env = TestEnvironment::setup().unwrap();
        env.log_times(4, 1, 1, SEQUENTIAL_DAYS_EVENT).await.unwrap();
        let stale = IncentiveEvent::new(1, 1, 77, SEQUENTIAL_DAYS_EVENT).unwrap();
        env.pipeline.queue.enqueue(stale).await.unwrap();

        crate::assert_not_awarded!(env.run().await.unwrap());
        assert_eq!(env.pipeline.counter.count(1, 1).unwrap(), 4);
    }
}
