use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Aggregated performance metrics for one agency over a reporting period.
///
/// Rates are percentages in `[0, 100]`; the scorer trusts them as-is and only
/// normalizes the volume counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgencyMetrics {
    pub total_properties: u32,
    pub total_contracts: u32,
    /// Share of billed rent actually collected.
    pub rent_collection_rate: f64,
    pub tenant_satisfaction: f64,
    pub owner_satisfaction: f64,
}

/// Reward categories granted after a ranking campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    CashBonus,
    DiscountPercent,
    QualityBadge,
}

impl RewardKind {
    pub const fn label(self) -> &'static str {
        match self {
            RewardKind::CashBonus => "cash_bonus",
            RewardKind::DiscountPercent => "discount_percent",
            RewardKind::QualityBadge => "quality_badge",
        }
    }
}

/// A reward granted to an agency, redeemable for a fixed window after the
/// campaign closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyReward {
    pub kind: RewardKind,
    pub title: String,
    pub description: String,
    /// Currency amount for cash bonuses, percentage for discounts, 0 for
    /// badges.
    pub value: f64,
    pub valid_months: u32,
}

impl AgencyReward {
    /// Resolve the validity window to an absolute expiry date. The caller
    /// supplies the grant date so the computation stays pure.
    pub fn valid_until(&self, granted_on: NaiveDate) -> NaiveDate {
        granted_on
            .checked_add_months(Months::new(self.valid_months))
            .unwrap_or(granted_on)
    }
}
