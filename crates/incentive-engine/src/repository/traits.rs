//! 仓储 Trait 定义

use std::sync::Arc;

use async_trait::async_trait;
use incentive_shared::error::Result;

use crate::employer_incentive::EmployerIncentive;
use crate::models::{Incentive, IncentiveEvent};

/// 激励计划仓储接口
///
/// 全局激励计划目录，雇主从中选择要采用的计划。
#[async_trait]
pub trait IncentiveRepository: Send + Sync {
    /// 创建一个未保存的激励计划（id 为 0，默认启用）
    async fn create(&self, name: &str, description: &str) -> Result<Arc<dyn Incentive>>;

    /// 按 id 获取，不存在返回 NotFound
    async fn get(&self, id: i64) -> Result<Arc<dyn Incentive>>;

    /// 所有启用中的激励计划，按 id 升序
    async fn get_active_incentives(&self) -> Result<Vec<Arc<dyn Incentive>>>;

    /// 保存已存在的激励计划
    async fn save(&self, incentives: &[Arc<dyn Incentive>]) -> Result<()>;

    /// 启用或停用
    async fn set_active(&self, id: i64, active: bool) -> Result<()>;
}

/// 雇主激励仓储接口
///
/// 维护雇主与激励计划之间的关联，并为待处理事件找到对应的雇主激励。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployerIncentiveRepository: Send + Sync {
    /// 为雇主关联一个已保存的激励计划，分配新的雇主激励 id
    async fn create(&self, employer_id: i64, incentive_id: i64) -> Result<Arc<EmployerIncentive>>;

    /// 按雇主激励 id 获取
    async fn get(&self, id: i64) -> Result<Arc<EmployerIncentive>>;

    /// 保存已存在的雇主激励，改写其雇主与激励计划的关联
    ///
    /// 新记录或未知 id 返回 InvalidArgument，任何一条不合法都不写入。
    async fn save(&self, employer_incentives: &[Arc<EmployerIncentive>]) -> Result<()>;

    /// 某雇主的全部雇主激励，按 id 升序
    async fn get_for_employer(&self, employer_id: i64) -> Result<Vec<Arc<EmployerIncentive>>>;

    /// 根据事件携带的雇主激励 id 获取，不存在返回 NotFound
    async fn get_for_event(&self, event: &IncentiveEvent) -> Result<Arc<EmployerIncentive>>;

    /// 根据雇主和事件名称（即激励计划名称）获取，不存在返回 NotFound
    async fn get_for_employer_by_event(
        &self,
        employer_id: i64,
        event_name: &str,
    ) -> Result<Arc<EmployerIncentive>>;
}
