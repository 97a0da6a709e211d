use serde::{Deserialize, Serialize};

use super::domain::{AgencyId, RankingPeriod, RankingRecord};
use crate::scoring::agency::AgencyReward;

/// Persistence boundary for campaign outcomes so rankings survive restarts
/// and stay auditable.
pub trait RankingRepository: Send + Sync {
    /// Store a fresh campaign record. Fails with [`RepositoryError::Conflict`]
    /// when the period was already ranked.
    fn insert(&self, record: RankingRecord) -> Result<RankingRecord, RepositoryError>;
    fn fetch(&self, period: &RankingPeriod) -> Result<Option<RankingRecord>, RepositoryError>;
    /// Most recently generated record, if any campaign ran.
    fn latest(&self) -> Result<Option<RankingRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("a ranking already exists for this period")]
    Conflict,
    #[error("no ranking recorded for this period")]
    NotFound,
    #[error("ranking store unavailable: {0}")]
    Storage(String),
}

/// Notification published for each agency that earned at least one reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardNotice {
    pub agency_id: AgencyId,
    pub period: RankingPeriod,
    pub rewards: Vec<AgencyReward>,
}

/// Outbound boundary carrying reward notices to the agencies.
pub trait RewardNotifier: Send + Sync {
    fn publish(&self, notice: RewardNotice) -> Result<(), NotifyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("reward notification failed: {0}")]
    Delivery(String),
}
