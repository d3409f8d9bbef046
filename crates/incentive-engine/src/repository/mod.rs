//! 仓储层
//!
//! 定义仓储接口，便于引擎依赖抽象而非具体实现。内存实现持有构造时传入的表，
//! 供测试和演示使用；真实持久化由外部实现这些 trait。

mod action_map;
mod employer_incentive_repo;
mod incentive_repo;
mod traits;

pub use action_map::ActionMap;
pub use employer_incentive_repo::{EmployerIncentiveLink, InMemoryEmployerIncentiveRepository};
pub use incentive_repo::{InMemoryIncentiveRepository, IncentiveRecord};
pub use traits::{EmployerIncentiveRepository, IncentiveRepository};

#[cfg(test)]
pub use traits::MockEmployerIncentiveRepository;
