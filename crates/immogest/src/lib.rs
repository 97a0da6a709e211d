//! Scoring and ranking core for the ImmoGest multi-agency real-estate platform.
//!
//! The crate hosts two pure scoring engines (property standing classification
//! and agency performance scoring) plus the ranking campaign service built on
//! top of them. HTTP wiring for the campaign surface lives in
//! [`scoring::ranking::router`]; everything else is plain in-process API.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
