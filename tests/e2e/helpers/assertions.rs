//! 自定义断言宏和辅助函数

use incentive_engine::RunOutcome;

/// 断言本次排空发放了奖励
#[macro_export]
macro_rules! assert_awarded {
    ($outcome:expr, $user_id:expr, $employer_incentive_id:expr) => {
        let outcome = &$outcome;
        let award = outcome.award().expect("应该发放奖励");
        assert_eq!(award.user_id, $user_id, "奖励的用户不符");
        assert_eq!(
            award.employer_incentive_id, $employer_incentive_id,
            "奖励的雇主激励不符"
        );
    };
}

/// 断言本次排空没有发放奖励
#[macro_export]
macro_rules! assert_not_awarded {
    ($outcome:expr) => {
        let outcome = &$outcome;
        assert!(!outcome.is_awarded(), "不应该发放奖励: {:?}", outcome);
    };
}

/// 返回发放了奖励的结果序号（从 1 开始）
pub fn awarded_positions(outcomes: &[RunOutcome]) -> Vec<usize> {
    outcomes
        .iter()
        .enumerate()
        .filter(|(_, outcome)| outcome.is_awarded())
        .map(|(index, _)| index + 1)
        .collect()
}
