use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::scoring::agency::AgencyMetrics;
use crate::scoring::ranking::domain::{AgencyEntry, AgencyId, RankingPeriod, RankingRecord};
use crate::scoring::ranking::repository::{
    NotifyError, RankingRepository, RepositoryError, RewardNotice, RewardNotifier,
};
use crate::scoring::ranking::RankingService;

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<BTreeMap<RankingPeriod, RankingRecord>>,
}

impl RankingRepository for MemoryRepository {
    fn insert(&self, record: RankingRecord) -> Result<RankingRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.period) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.period.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, period: &RankingPeriod) -> Result<Option<RankingRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(period).cloned())
    }

    fn latest(&self) -> Result<Option<RankingRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .max_by_key(|record| record.generated_on)
            .cloned())
    }
}

pub(super) struct UnavailableRepository;

impl RankingRepository for UnavailableRepository {
    fn insert(&self, _record: RankingRecord) -> Result<RankingRecord, RepositoryError> {
        Err(RepositoryError::Storage("store offline".to_string()))
    }

    fn fetch(&self, _period: &RankingPeriod) -> Result<Option<RankingRecord>, RepositoryError> {
        Err(RepositoryError::Storage("store offline".to_string()))
    }

    fn latest(&self) -> Result<Option<RankingRecord>, RepositoryError> {
        Err(RepositoryError::Storage("store offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemoryNotifier {
    notices: Mutex<Vec<RewardNotice>>,
}

impl RewardNotifier for MemoryNotifier {
    fn publish(&self, notice: RewardNotice) -> Result<(), NotifyError> {
        let mut guard = self.notices.lock().expect("notifier mutex poisoned");
        guard.push(notice);
        Ok(())
    }
}

impl MemoryNotifier {
    pub(super) fn notices(&self) -> Vec<RewardNotice> {
        self.notices.lock().expect("notifier mutex poisoned").clone()
    }
}

pub(super) fn period() -> RankingPeriod {
    RankingPeriod("2026-S1".to_string())
}

pub(super) fn campaign_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 30).expect("valid date")
}

pub(super) fn entry(
    id: &str,
    name: &str,
    total_properties: u32,
    total_contracts: u32,
    rent_collection_rate: f64,
    tenant_satisfaction: f64,
    owner_satisfaction: f64,
) -> AgencyEntry {
    AgencyEntry {
        agency_id: AgencyId(id.to_string()),
        name: name.to_string(),
        metrics: AgencyMetrics {
            total_properties,
            total_contracts,
            rent_collection_rate,
            tenant_satisfaction,
            owner_satisfaction,
        },
    }
}

/// Four agencies with distinct composite scores: 100.0, 81.0, 50.0, 23.0.
pub(super) fn sample_entries() -> Vec<AgencyEntry> {
    vec![
        entry("ag-delta", "Agence Delta", 10, 5, 40.0, 30.0, 20.0),
        entry("ag-alpha", "Agence Alpha", 100, 50, 100.0, 100.0, 100.0),
        entry("ag-gamma", "Agence Gamma", 50, 25, 50.0, 50.0, 50.0),
        entry("ag-beta", "Agence Beta", 80, 40, 95.0, 70.0, 60.0),
    ]
}

pub(super) fn build_service() -> (
    RankingService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = RankingService::new(repository.clone(), notifier.clone());
    (service, repository, notifier)
}
