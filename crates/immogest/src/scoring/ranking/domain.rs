use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::agency::{AgencyMetrics, AgencyReward};

/// Identifier wrapper for subscribed agencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgencyId(pub String);

/// Campaign identifier, e.g. `2026-S1` for the first semester of 2026.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RankingPeriod(pub String);

/// One agency's input to a ranking campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyEntry {
    pub agency_id: AgencyId,
    pub name: String,
    pub metrics: AgencyMetrics,
}

/// Final position of an agency after a campaign, with its reward grants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyStanding {
    pub agency_id: AgencyId,
    pub name: String,
    pub rank: u32,
    pub score: f64,
    pub rewards: Vec<AgencyReward>,
}

/// Persisted outcome of one campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRecord {
    pub period: RankingPeriod,
    pub generated_on: NaiveDate,
    pub standings: Vec<AgencyStanding>,
}
