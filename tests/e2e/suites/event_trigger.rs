//! 事件触发测试套件
//!
//! 测试从数据记录到发放奖励的完整链路。

use crate::helpers::*;
use crate::setup::TestEnvironment;
use incentive_engine::test_utils::{SEQUENTIAL_DAYS_EVENT, USER_BIRTH_EVENT};
use incentive_engine::{AwardReason, IncentiveCounter};

#[cfg(test)]
mod threshold_tests {
    use super::*;

    /// 连续 5 次记录数据，只在第 5 次发放奖励
    #[tokio::test]
    async fn test_fifth_event_awards_once() {
        let env = TestEnvironment::setup().unwrap();
        env.log_times(5, 1, 1, SEQUENTIAL_DAYS_EVENT).await.unwrap();

        let outcome = env.run().await.unwrap();
        crate::assert_awarded!(outcome, 1, 1);
        assert_eq!(outcome.report().processed, 5, "前 4 个事件不应发放奖励");
        assert_eq!(
            outcome.award().unwrap().reason,
            AwardReason::ThresholdReached {
                count: 5,
                required: 5
            }
        );

        // 队列已排空，再次运行不会重复发放
        let outcome = env.run().await.unwrap();
        crate::assert_not_awarded!(outcome);
        assert_eq!(outcome.report().processed, 0);
    }

    #[tokio::test]
    async fn test_award_position_when_processed_one_by_one() {
        let env = TestEnvironment::setup().unwrap();

        let outcomes = env
            .log_and_run(5, 1, 1, SEQUENTIAL_DAYS_EVENT)
            .await
            .unwrap();
        assert_eq!(awarded_positions(&outcomes), vec![5]);
    }

    /// 奖励后计数器归零，第 10 次再次发放
    #[tokio::test]
    async fn test_counter_rearms_after_award() {
        let env = TestEnvironment::setup().unwrap();

        let outcomes = env
            .log_and_run(11, 1, 1, SEQUENTIAL_DAYS_EVENT)
            .await
            .unwrap();
        assert_eq!(awarded_positions(&outcomes), vec![5, 10]);
        assert_eq!(env.pipeline.counter.get_count(1, 1).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_users_count_independently() {
        let env = TestEnvironment::setup().unwrap();
        env.log_times(4, 1, 1, SEQUENTIAL_DAYS_EVENT).await.unwrap();
        env.log_times(4, 2, 1, SEQUENTIAL_DAYS_EVENT).await.unwrap();
        env.log(2, 1, SEQUENTIAL_DAYS_EVENT).await.unwrap();

        let outcome = env.run().await.unwrap();
        crate::assert_awarded!(outcome, 2, 1);
        assert_eq!(env.pipeline.counter.get_count(1, 1).await.unwrap(), 4);
    }
}

#[cfg(test)]
mod immediate_tests {
    use super::*;

    /// 报告新生儿，第一个事件即发放奖励
    #[tokio::test]
    async fn test_user_birth_awards_immediately() {
        let env = TestEnvironment::setup().unwrap();
        let event = env.log(3, 1, USER_BIRTH_EVENT).await.unwrap();
        assert_eq!(event.employer_incentive_id(), 2);

        let outcome = env.run().await.unwrap();
        crate::assert_awarded!(outcome, 3, 2);
        assert_eq!(outcome.award().unwrap().reason, AwardReason::Immediate);
        assert_eq!(outcome.report().processed, 1);
    }

    /// 第一次奖励即返回，剩余事件留在队列中
    #[tokio::test]
    async fn test_remaining_events_stay_queued() {
        let env = TestEnvironment::setup().unwrap();
        env.log(1, 1, USER_BIRTH_EVENT).await.unwrap();
        env.log(2, 1, USER_BIRTH_EVENT).await.unwrap();
        env.log(3, 1, SEQUENTIAL_DAYS_EVENT).await.unwrap();

        let outcome = env.run().await.unwrap();
        crate::assert_awarded!(outcome, 1, 2);
        assert_eq!(env.pipeline.queue.len(), 2);

        let outcome = env.run().await.unwrap();
        crate::assert_awarded!(outcome, 2, 2);
        assert_eq!(env.pipeline.queue.len(), 1);

        let outcome = env.run().await.unwrap();
        crate::assert_not_awarded!(outcome);
        assert!(env.pipeline.queue.is_empty());
    }

    #[tokio::test]
    async fn test_award_serializes_for_downstream() {
        let env = TestEnvironment::setup().unwrap();
        env.log(5, 1, USER_BIRTH_EVENT).await.unwrap();

        let outcome = env.run().await.unwrap();
        let json = serde_json::to_value(outcome.award().unwrap()).unwrap();
        assert_eq!(json["userId"], 5);
        assert_eq!(json["eventName"], USER_BIRTH_EVENT);
        assert_eq!(json["reason"]["type"], "IMMEDIATE");
    }
}
