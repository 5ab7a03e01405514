//! NAVIGATOR: deterministic IVF readiness scoring.
//!
//! Raw clinical measurements flow through three domain scorers into a weighted
//! global index, and a rule tree turns the scores into an ordered, sectioned
//! list of suggested next steps. Everything under [`navigator`] is pure; the
//! `config`, `error` and `telemetry` modules serve the binaries built on top.

pub mod config;
pub mod error;
pub mod navigator;
pub mod telemetry;
