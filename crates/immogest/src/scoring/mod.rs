//! Scoring engines and the campaign service built on top of them.
//!
//! [`standing`] and [`agency`] are pure, stateless computations; [`ranking`]
//! composes the agency scorer with persistence and notification boundaries.

pub mod agency;
pub mod ranking;
pub mod standing;
