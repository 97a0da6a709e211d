//! Property standing classification from room finish attributes.
//!
//! A property's standing (`economique` / `moyen` / `haut`) is the average of
//! independent, additive per-room sub-scores. The computation is pure and
//! total: malformed enum values score as their fallback bucket, and an empty
//! room list short-circuits to the lowest tier.

pub mod domain;
mod rules;

#[cfg(test)]
mod tests;

pub use domain::{
    CeilingType, FloorType, JoineryMaterial, RoomRecord, StandingFactor, StandingTier,
};

use serde::{Deserialize, Serialize};

/// Average score at or above which a property is `haut`.
const HAUT_THRESHOLD: f64 = 8.0;
/// Average score at or above which a property is at least `moyen`.
const MOYEN_THRESHOLD: f64 = 5.0;

/// Discrete contribution to a room's score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: StandingFactor,
    pub points: f64,
    pub notes: String,
}

/// Scored breakdown for a single room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomEvaluation {
    pub components: Vec<ScoreComponent>,
    pub total: f64,
}

/// Classification output with the per-room audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingEvaluation {
    pub tier: StandingTier,
    pub average_score: f64,
    pub rooms: Vec<RoomEvaluation>,
}

/// Classify a property's standing from its rooms.
pub fn classify_standing(rooms: &[RoomRecord]) -> StandingTier {
    evaluate_standing(rooms).tier
}

/// Classify a property while retaining the per-room component breakdown the
/// property editor surfaces to agents.
pub fn evaluate_standing(rooms: &[RoomRecord]) -> StandingEvaluation {
    if rooms.is_empty() {
        return StandingEvaluation {
            tier: StandingTier::Economique,
            average_score: 0.0,
            rooms: Vec::new(),
        };
    }

    let evaluations: Vec<RoomEvaluation> = rooms
        .iter()
        .map(|room| {
            let (components, total) = rules::score_room(room);
            RoomEvaluation { components, total }
        })
        .collect();

    let average_score =
        evaluations.iter().map(|room| room.total).sum::<f64>() / evaluations.len() as f64;

    StandingEvaluation {
        tier: tier_for(average_score),
        average_score,
        rooms: evaluations,
    }
}

fn tier_for(average_score: f64) -> StandingTier {
    if average_score >= HAUT_THRESHOLD {
        StandingTier::Haut
    } else if average_score >= MOYEN_THRESHOLD {
        StandingTier::Moyen
    } else {
        StandingTier::Economique
    }
}
