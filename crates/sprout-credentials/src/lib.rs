//! sprout-credentials
//!
//! Deterministic credential registry and the login eligibility engine.
//! Identity here is entirely local: the credential set is derived from
//! fixed arithmetic (matching the cards already distributed to families),
//! and the single-use policy rests on one persisted usage log.

pub mod eligibility;
pub mod error;
pub mod registry;
