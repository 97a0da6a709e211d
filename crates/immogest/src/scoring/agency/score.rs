use super::domain::AgencyMetrics;

/// 100 managed properties earn full marks on the portfolio axis.
const PROPERTY_TARGET: f64 = 100.0;
/// 50 active contracts earn full marks on the contracts axis.
const CONTRACT_TARGET: f64 = 50.0;

// Composite weights. They sum to 1.00; rebalance all five together when
// touching any of them.
const PROPERTY_WEIGHT: f64 = 0.25;
const CONTRACT_WEIGHT: f64 = 0.20;
const COLLECTION_WEIGHT: f64 = 0.30;
const TENANT_WEIGHT: f64 = 0.15;
const OWNER_WEIGHT: f64 = 0.10;

/// Composite 0-100 performance score used to rank competing agencies.
///
/// Volume counters are normalized against their targets and capped at 100;
/// the three percentage metrics are trusted as already normalized. The result
/// is rounded to 2 decimal places.
pub fn compute_agency_score(metrics: &AgencyMetrics) -> f64 {
    let properties = (metrics.total_properties as f64 / PROPERTY_TARGET * 100.0).min(100.0);
    let contracts = (metrics.total_contracts as f64 / CONTRACT_TARGET * 100.0).min(100.0);

    let weighted = properties * PROPERTY_WEIGHT
        + contracts * CONTRACT_WEIGHT
        + metrics.rent_collection_rate * COLLECTION_WEIGHT
        + metrics.tenant_satisfaction * TENANT_WEIGHT
        + metrics.owner_satisfaction * OWNER_WEIGHT;

    round2(weighted)
}

/// Tenant satisfaction from renewal, complaint, and stability indicators,
/// rounded to a whole number of points.
///
/// Each complaint per hundred tenancies costs ten points, floored at zero.
/// Twenty months of average stay earn full stability marks.
pub fn compute_tenant_satisfaction(
    renewal_rate: f64,
    complaint_rate: f64,
    average_stay_months: f64,
) -> f64 {
    let renewal = renewal_rate;
    let complaints = (100.0 - complaint_rate * 10.0).max(0.0);
    let stability = (average_stay_months * 5.0).min(100.0);

    (renewal * 0.4 + complaints * 0.3 + stability * 0.3).round()
}

/// Owner satisfaction from punctuality, communication, and retention
/// indicators, rounded to a whole number of points.
pub fn compute_owner_satisfaction(
    payment_punctuality: f64,
    communication_score: f64,
    retention_rate: f64,
) -> f64 {
    (payment_punctuality * 0.4 + communication_score * 0.3 + retention_rate * 0.3).round()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
pub(super) fn weight_sum() -> f64 {
    PROPERTY_WEIGHT + CONTRACT_WEIGHT + COLLECTION_WEIGHT + TENANT_WEIGHT + OWNER_WEIGHT
}
