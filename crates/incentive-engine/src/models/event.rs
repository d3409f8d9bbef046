use incentive_shared::error::{IncentiveError, Result};
use serde::{Deserialize, Serialize};

use crate::validation::IDENTIFIER_PATTERN;

/// 激励事件
///
/// 用户完成某个行为后由队列创建，创建后不可修改，只会被处理器消费一次。
/// 事件可能经由外部传输反序列化而来（绕过构造函数），因此 `validate`
/// 会完整地重新校验所有字段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct IncentiveEvent {
    #[validate(range(min = 1, message = "必须大于 0"))]
    user_id: i64,
    #[validate(range(min = 1, message = "必须大于 0"))]
    employer_id: i64,
    #[validate(range(min = 1, message = "必须大于 0"))]
    employer_incentive_id: i64,
    #[validate(regex(path = *IDENTIFIER_PATTERN, message = "必须是非空的字母数字字符串（允许连字符）"))]
    event_name: String,
}

/// 尚未解析出雇主激励 id 的原始触发参数
#[derive(validator::Validate)]
struct TriggerFields<'a> {
    #[validate(range(min = 1, message = "必须大于 0"))]
    user_id: i64,
    #[validate(range(min = 1, message = "必须大于 0"))]
    employer_id: i64,
    #[validate(regex(path = *IDENTIFIER_PATTERN, message = "必须是非空的字母数字字符串（允许连字符）"))]
    event_name: &'a str,
}

impl IncentiveEvent {
    pub fn new(
        user_id: i64,
        employer_id: i64,
        employer_incentive_id: i64,
        event_name: impl Into<String>,
    ) -> Result<Self> {
        let event = Self {
            user_id,
            employer_id,
            employer_incentive_id,
            event_name: event_name.into(),
        };
        event.check()?;
        Ok(event)
    }

    /// 校验原始触发参数（尚未解析出雇主激励 id 时使用）
    pub fn check_trigger(user_id: i64, employer_id: i64, event_name: &str) -> Result<()> {
        let fields = TriggerFields {
            user_id,
            employer_id,
            event_name,
        };
        validator::Validate::validate(&fields).map_err(|e| IncentiveError::from_field_errors(&e))
    }

    fn check(&self) -> Result<()> {
        validator::Validate::validate(self).map_err(|e| IncentiveError::from_field_errors(&e))
    }

    /// 使用前重新校验，失败返回 `IncentiveError::Validation`
    pub fn validate(&self) -> Result<()> {
        validator::Validate::validate(self)?;
        Ok(())
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn employer_id(&self) -> i64 {
        self.employer_id
    }

    pub fn employer_incentive_id(&self) -> i64 {
        self.employer_incentive_id
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }
}
