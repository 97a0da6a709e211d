//! Agency performance scoring, satisfaction sub-scores, and reward grants.

pub mod domain;
mod rewards;
mod score;


pub use domain::{AgencyMetrics, AgencyReward, RewardKind};
pub use rewards::{assign_rewards, QUALITY_BADGE_THRESHOLD, REWARD_VALIDITY_MONTHS};
pub use score::{compute_agency_score, compute_owner_satisfaction, compute_tenant_satisfaction};
