//! 激励管理测试套件
//!
//! 激励计划的启停、保存，以及为新雇主采用激励计划。

use crate::setup::TestEnvironment;
use incentive_engine::test_utils::USER_BIRTH_EVENT;
use incentive_engine::{
    EmployerIncentiveRepository, ImmutableIncentive, Incentive, IncentiveRepository,
};
use std::sync::Arc;

#[cfg(test)]
mod incentive_tests {
    use super::*;

    #[tokio::test]
    async fn test_active_incentives_follow_set_active() {
        let env = TestEnvironment::setup().unwrap();
        let incentives = &env.pipeline.incentives;

        let names: Vec<String> = incentives
            .get_active_incentives()
            .await
            .unwrap()
            .iter()
            .map(|incentive| incentive.name().to_string())
            .collect();
        assert_eq!(names, vec!["data-logged-5-sequential-days", "user-birth"]);

        incentives.set_active(1, false).await.unwrap();
        assert_eq!(incentives.get_active_incentives().await.unwrap().len(), 1);
    }

    /// 保存后的描述在下一次组装雇主激励时生效
    #[tokio::test]
    async fn test_saved_incentive_is_used_by_employer_incentive() {
        let env = TestEnvironment::setup().unwrap();
        let updated: Arc<dyn Incentive> = Arc::new(
            ImmutableIncentive::new(USER_BIRTH_EVENT, "A new family member", true, 2).unwrap(),
        );
        env.pipeline.incentives.save(&[updated]).await.unwrap();

        let record = env.pipeline.repository.get(2).await.unwrap();
        assert_eq!(record.incentive().description(), "A new family member");
    }
}

#[cfg(test)]
mod employer_incentive_tests {
    use super::*;

    #[tokio::test]
    async fn test_employer_lists_adopted_incentives() {
        let env = TestEnvironment::setup().unwrap();

        let records = env.pipeline.repository.get_for_employer(1).await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|record| record.employer_id() == 1));
    }

    /// 新雇主采用激励计划后，其用户的事件即可触发奖励
    #[tokio::test]
    async fn test_new_employer_adoption_awards() {
        let env = TestEnvironment::setup().unwrap();
        assert!(env.log(8, 2, USER_BIRTH_EVENT).await.is_err());

        let created = env.pipeline.repository.create(2, 2).await.unwrap();
        assert_eq!(created.id(), 3);

        env.log(8, 2, USER_BIRTH_EVENT).await.unwrap();
        let outcome = env.run().await.unwrap();
        crate::assert_awarded!(outcome, 8, 3);
        assert_eq!(outcome.award().unwrap().employer_id, 2);
    }
}
