//! 激励名称到奖励动作的映射
//!
//! 仓储根据激励计划名称查找要绑定的动作列表，替换动作实现只需替换映射。

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use incentive_shared::error::{IncentiveError, Result};

use crate::action::AwardAction;
use crate::validation::require_identifier;

/// 动作映射
#[derive(Clone, Default)]
pub struct ActionMap {
    entries: HashMap<String, Vec<Arc<dyn AwardAction>>>,
}

impl ActionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式注册，便于组装
    pub fn with_actions(
        mut self,
        incentive_name: impl Into<String>,
        actions: Vec<Arc<dyn AwardAction>>,
    ) -> Result<Self> {
        self.insert(incentive_name, actions)?;
        Ok(self)
    }

    /// 注册某个激励计划的动作列表，已存在时替换
    pub fn insert(
        &mut self,
        incentive_name: impl Into<String>,
        actions: Vec<Arc<dyn AwardAction>>,
    ) -> Result<()> {
        let incentive_name = incentive_name.into();
        require_identifier("incentive_name", &incentive_name)?;

        if actions.is_empty() {
            return Err(IncentiveError::invalid_argument(
                "actions",
                format!("激励 {incentive_name} 至少需要一个奖励动作"),
            ));
        }

        self.entries.insert(incentive_name, actions);
        Ok(())
    }

    pub fn get(&self, incentive_name: &str) -> Option<&[Arc<dyn AwardAction>]> {
        self.entries.get(incentive_name).map(Vec::as_slice)
    }

    pub fn contains(&self, incentive_name: &str) -> bool {
        self.entries.contains_key(incentive_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ActionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, actions) in &self.entries {
            map.entry(name, &actions.iter().map(|a| a.kind()).collect::<Vec<_>>());
        }
        map.finish()
    }
}
