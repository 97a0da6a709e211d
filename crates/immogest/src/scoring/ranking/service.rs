use std::sync::Arc;

use chrono::NaiveDate;

use super::domain::{AgencyEntry, AgencyStanding, RankingPeriod, RankingRecord};
use super::repository::{
    NotifyError, RankingRepository, RepositoryError, RewardNotice, RewardNotifier,
};
use crate::scoring::agency::{assign_rewards, compute_agency_score};

/// Service composing the agency scorer, a campaign repository, and a reward
/// notifier.
pub struct RankingService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> RankingService<R, N>
where
    R: RankingRepository + 'static,
    N: RewardNotifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Run a campaign: score every entry, rank by descending score, attach
    /// reward grants, persist the record, and notify rewarded agencies.
    pub fn run(
        &self,
        period: RankingPeriod,
        generated_on: NaiveDate,
        entries: Vec<AgencyEntry>,
    ) -> Result<RankingRecord, RankingServiceError> {
        let mut scored: Vec<(AgencyEntry, f64)> = entries
            .into_iter()
            .map(|entry| {
                let score = compute_agency_score(&entry.metrics);
                (entry, score)
            })
            .collect();

        // Stable sort keeps submission order for equal scores.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let standings = scored
            .into_iter()
            .enumerate()
            .map(|(index, (entry, score))| {
                let rank = index as u32 + 1;
                AgencyStanding {
                    agency_id: entry.agency_id,
                    name: entry.name,
                    rank,
                    score,
                    rewards: assign_rewards(rank, score),
                }
            })
            .collect();

        let record = RankingRecord {
            period,
            generated_on,
            standings,
        };
        let stored = self.repository.insert(record)?;

        for standing in &stored.standings {
            if standing.rewards.is_empty() {
                continue;
            }
            self.notifier.publish(RewardNotice {
                agency_id: standing.agency_id.clone(),
                period: stored.period.clone(),
                rewards: standing.rewards.clone(),
            })?;
        }

        Ok(stored)
    }

    /// Fetch a past campaign record for API responses.
    pub fn get(&self, period: &RankingPeriod) -> Result<RankingRecord, RankingServiceError> {
        let record = self
            .repository
            .fetch(period)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Fetch the most recent campaign record.
    pub fn latest(&self) -> Result<RankingRecord, RankingServiceError> {
        let record = self.repository.latest()?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the ranking service.
#[derive(Debug, thiserror::Error)]
pub enum RankingServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}
