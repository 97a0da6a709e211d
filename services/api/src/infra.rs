use immogest::scoring::ranking::{
    NotifyError, RankingPeriod, RankingRecord, RankingRepository, RepositoryError, RewardNotice,
    RewardNotifier,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Campaign store backing the service until the platform database takes over.
#[derive(Default, Clone)]
pub(crate) struct InMemoryRankingRepository {
    records: Arc<Mutex<BTreeMap<RankingPeriod, RankingRecord>>>,
}

impl RankingRepository for InMemoryRankingRepository {
    fn insert(&self, record: RankingRecord) -> Result<RankingRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("ranking mutex poisoned");
        if guard.contains_key(&record.period) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.period.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, period: &RankingPeriod) -> Result<Option<RankingRecord>, RepositoryError> {
        let guard = self.records.lock().expect("ranking mutex poisoned");
        Ok(guard.get(period).cloned())
    }

    fn latest(&self) -> Result<Option<RankingRecord>, RepositoryError> {
        let guard = self.records.lock().expect("ranking mutex poisoned");
        Ok(guard
            .values()
            .max_by_key(|record| record.generated_on)
            .cloned())
    }
}

/// Notifier that records notices and surfaces them in the service log.
#[derive(Default, Clone)]
pub(crate) struct LogRewardNotifier {
    notices: Arc<Mutex<Vec<RewardNotice>>>,
}

impl RewardNotifier for LogRewardNotifier {
    fn publish(&self, notice: RewardNotice) -> Result<(), NotifyError> {
        info!(
            agency = %notice.agency_id.0,
            period = %notice.period.0,
            rewards = notice.rewards.len(),
            "reward notice published"
        );
        self.notices
            .lock()
            .expect("notifier mutex poisoned")
            .push(notice);
        Ok(())
    }
}

impl LogRewardNotifier {
    pub(crate) fn notices(&self) -> Vec<RewardNotice> {
        self.notices.lock().expect("notifier mutex poisoned").clone()
    }
}
