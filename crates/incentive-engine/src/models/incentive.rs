use std::fmt::Debug;

use incentive_shared::error::{IncentiveError, Result};

use crate::validation::{IDENTIFIER_PATTERN, not_blank};

/// 激励计划
///
/// 以 trait 暴露是因为其他实现（例如直接映射数据库行的可变对象）可能在
/// 构造之后被修改，所以使用方在每次使用前都要调用 `validate`。
pub trait Incentive: Send + Sync + Debug {
    /// 持久化 id，0 表示尚未保存
    fn id(&self) -> i64;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn is_active(&self) -> bool;

    /// 校验当前状态，失败返回 `IncentiveError::Validation`
    fn validate(&self) -> Result<()>;

    fn is_persisted(&self) -> bool {
        self.id() >= 1
    }
}

/// 不可变激励计划
#[derive(Debug, Clone, PartialEq, Eq, validator::Validate)]
pub struct ImmutableIncentive {
    #[validate(range(min = 0, message = "必须大于等于 0"))]
    id: i64,
    #[validate(regex(path = *IDENTIFIER_PATTERN, message = "必须是非空的字母数字字符串（允许连字符）"))]
    name: String,
    #[validate(custom(function = "not_blank"))]
    description: String,
    active: bool,
}

impl ImmutableIncentive {
    /// 创建激励计划，`id` 为 0 表示未持久化
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        active: bool,
        id: i64,
    ) -> Result<Self> {
        let incentive = Self {
            id,
            name: name.into(),
            description: description.into(),
            active,
        };
        incentive.check()?;
        Ok(incentive)
    }

    fn check(&self) -> Result<()> {
        validator::Validate::validate(self).map_err(|e| IncentiveError::from_field_errors(&e))
    }
}

impl Incentive for ImmutableIncentive {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn validate(&self) -> Result<()> {
        validator::Validate::validate(self)?;
        Ok(())
    }
}
