//! Semestral ranking campaigns over subscribed agencies.
//!
//! Scores every agency with the composite scorer, ranks them, persists the
//! outcome behind [`RankingRepository`], and publishes reward notices through
//! [`RewardNotifier`].

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{AgencyEntry, AgencyId, AgencyStanding, RankingPeriod, RankingRecord};
pub use repository::{
    NotifyError, RankingRepository, RepositoryError, RewardNotice, RewardNotifier,
};
pub use router::ranking_router;
pub use service::{RankingService, RankingServiceError};
