//! 内存雇主激励仓储

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use incentive_shared::error::{IncentiveError, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::action_map::ActionMap;
use super::traits::{EmployerIncentiveRepository, IncentiveRepository};
use crate::employer_incentive::EmployerIncentive;
use crate::models::{Incentive, IncentiveEvent};
use crate::validation::require_positive;

/// 雇主与激励计划的关联行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerIncentiveLink {
    pub employer_id: i64,
    pub incentive_id: i64,
}

impl EmployerIncentiveLink {
    pub fn new(employer_id: i64, incentive_id: i64) -> Self {
        Self {
            employer_id,
            incentive_id,
        }
    }
}

/// 内存雇主激励仓储
///
/// 关联表按雇主激励 id 有序存放；每次读取都从激励仓储取出最新的激励计划，
/// 再按激励名称从动作映射中取出动作列表组装成 `EmployerIncentive`。
pub struct InMemoryEmployerIncentiveRepository {
    incentives: Arc<dyn IncentiveRepository>,
    links: RwLock<BTreeMap<i64, EmployerIncentiveLink>>,
    actions: ActionMap,
}

impl InMemoryEmployerIncentiveRepository {
    pub fn new(
        incentives: Arc<dyn IncentiveRepository>,
        links: HashMap<i64, EmployerIncentiveLink>,
        actions: ActionMap,
    ) -> Self {
        info!(
            link_count = links.len(),
            action_map = ?actions,
            "雇主激励仓储初始化完成"
        );

        Self {
            incentives,
            links: RwLock::new(links.into_iter().collect()),
            actions,
        }
    }

    fn link(&self, id: i64) -> Option<EmployerIncentiveLink> {
        self.links.read().get(&id).copied()
    }

    /// 组装雇主激励，激励计划没有配置动作时返回参数错误
    fn assemble(
        &self,
        id: i64,
        employer_id: i64,
        incentive: Arc<dyn Incentive>,
    ) -> Result<Arc<EmployerIncentive>> {
        incentive.validate()?;

        let actions = self.actions.get(incentive.name()).ok_or_else(|| {
            IncentiveError::invalid_argument(
                "incentive",
                format!("激励 {} 没有配置任何奖励动作", incentive.name()),
            )
        })?;

        let employer_incentive = EmployerIncentive::new(id, employer_id, incentive, actions.to_vec())?;
        employer_incentive.validate()?;
        Ok(Arc::new(employer_incentive))
    }

    async fn build(&self, id: i64, link: EmployerIncentiveLink) -> Result<Arc<EmployerIncentive>> {
        let incentive = self.incentives.get(link.incentive_id).await?;
        self.assemble(id, link.employer_id, incentive)
    }
}

#[async_trait]
impl EmployerIncentiveRepository for InMemoryEmployerIncentiveRepository {
    #[instrument(skip(self))]
    async fn create(&self, employer_id: i64, incentive_id: i64) -> Result<Arc<EmployerIncentive>> {
        require_positive("employer_id", employer_id)?;
        let incentive = self.incentives.get(incentive_id).await?;

        // 分配 id 与写入在同一把写锁内完成
        let mut links = self.links.write();
        let id = links.keys().next_back().copied().unwrap_or(0) + 1;
        let employer_incentive = self.assemble(id, employer_id, incentive)?;
        links.insert(id, EmployerIncentiveLink::new(employer_id, incentive_id));

        debug!(employer_incentive_id = id, "雇主激励已创建");
        Ok(employer_incentive)
    }

    #[instrument(skip_all, fields(count = employer_incentives.len()))]
    async fn save(&self, employer_incentives: &[Arc<EmployerIncentive>]) -> Result<()> {
        for record in employer_incentives {
            record.validate()?;
            if self.link(record.id()).is_none() {
                return Err(IncentiveError::invalid_argument(
                    "id",
                    format!("雇主激励 {} 不存在，新记录请使用 create", record.id()),
                ));
            }
            // 关联的激励计划必须仍在目录中
            self.incentives.get(record.incentive().id()).await?;
        }

        let mut links = self.links.write();
        for record in employer_incentives {
            links.insert(
                record.id(),
                EmployerIncentiveLink::new(record.employer_id(), record.incentive().id()),
            );
            debug!(employer_incentive_id = record.id(), "雇主激励已保存");
        }

        Ok(())
    }

    async fn get(&self, id: i64) -> Result<Arc<EmployerIncentive>> {
        let link = self
            .link(id)
            .ok_or_else(|| IncentiveError::not_found("EmployerIncentive", id))?;
        self.build(id, link).await
    }

    async fn get_for_employer(&self, employer_id: i64) -> Result<Vec<Arc<EmployerIncentive>>> {
        let matching: Vec<(i64, EmployerIncentiveLink)> = self
            .links
            .read()
            .iter()
            .filter(|(_, link)| link.employer_id == employer_id)
            .map(|(id, link)| (*id, *link))
            .collect();

        let mut out = Vec::with_capacity(matching.len());
        for (id, link) in matching {
            out.push(self.build(id, link).await?);
        }
        Ok(out)
    }

    #[instrument(
        skip(self, event),
        fields(employer_incentive_id = event.employer_incentive_id())
    )]
    async fn get_for_event(&self, event: &IncentiveEvent) -> Result<Arc<EmployerIncentive>> {
        event.validate()?;

        let id = event.employer_incentive_id();
        let link = self
            .link(id)
            .ok_or_else(|| IncentiveError::not_found("EmployerIncentive", id))?;
        self.build(id, link).await
    }

    #[instrument(skip(self))]
    async fn get_for_employer_by_event(
        &self,
        employer_id: i64,
        event_name: &str,
    ) -> Result<Arc<EmployerIncentive>> {
        self.get_for_employer(employer_id)
            .await?
            .into_iter()
            .find(|record| record.incentive().name() == event_name)
            .ok_or_else(|| {
                IncentiveError::not_found(
                    "EmployerIncentive",
                    format!("employer={employer_id},event={event_name}"),
                )
            })
    }
}
