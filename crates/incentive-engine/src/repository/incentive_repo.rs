//! 内存激励计划仓储

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use incentive_shared::error::{IncentiveError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::traits::IncentiveRepository;
use crate::models::{ImmutableIncentive, Incentive};

/// 激励计划表的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncentiveRecord {
    pub name: String,
    pub description: String,
    pub active: bool,
}

impl IncentiveRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            active,
        }
    }
}

/// 内存激励计划仓储
///
/// 表由调用方在构造时传入并归仓储所有，不使用全局静态数据。
#[derive(Debug, Default)]
pub struct InMemoryIncentiveRepository {
    rows: DashMap<i64, IncentiveRecord>,
}

impl InMemoryIncentiveRepository {
    pub fn new(table: HashMap<i64, IncentiveRecord>) -> Self {
        Self {
            rows: table.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn build(id: i64, row: &IncentiveRecord) -> Result<Arc<dyn Incentive>> {
        let incentive =
            ImmutableIncentive::new(row.name.clone(), row.description.clone(), row.active, id)?;
        Ok(Arc::new(incentive))
    }
}

#[async_trait]
impl IncentiveRepository for InMemoryIncentiveRepository {
    async fn create(&self, name: &str, description: &str) -> Result<Arc<dyn Incentive>> {
        let incentive = ImmutableIncentive::new(name, description, true, 0)?;
        Ok(Arc::new(incentive))
    }

    #[instrument(skip(self))]
    async fn get(&self, id: i64) -> Result<Arc<dyn Incentive>> {
        let row = self
            .rows
            .get(&id)
            .ok_or_else(|| IncentiveError::not_found("Incentive", id))?;
        Self::build(id, &row)
    }

    async fn get_active_incentives(&self) -> Result<Vec<Arc<dyn Incentive>>> {
        let mut active: Vec<(i64, IncentiveRecord)> = self
            .rows
            .iter()
            .filter(|entry| entry.value().active)
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        active.sort_by_key(|(id, _)| *id);

        active
            .iter()
            .map(|(id, row)| Self::build(*id, row))
            .collect()
    }

    async fn save(&self, incentives: &[Arc<dyn Incentive>]) -> Result<()> {
        // 先整体校验，任何一条不合法都不写入
        for incentive in incentives {
            incentive.validate()?;
            if !incentive.is_persisted() {
                return Err(IncentiveError::invalid_argument(
                    "id",
                    format!("新记录 {} 不能保存到内存仓储", incentive.name()),
                ));
            }
            if !self.rows.contains_key(&incentive.id()) {
                return Err(IncentiveError::not_found("Incentive", incentive.id()));
            }
        }

        for incentive in incentives {
            self.rows.insert(
                incentive.id(),
                IncentiveRecord::new(
                    incentive.name(),
                    incentive.description(),
                    incentive.is_active(),
                ),
            );
            debug!(incentive_id = incentive.id(), "激励计划已保存");
        }

        Ok(())
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<()> {
        let mut row = self
            .rows
            .get_mut(&id)
            .ok_or_else(|| IncentiveError::not_found("Incentive", id))?;
        row.active = active;
        debug!(incentive_id = id, active, "激励计划启用状态已更新");
        Ok(())
    }
}
