//! sprout-core
//!
//! Pure domain types for the child assessment system. No I/O, no clock —
//! this is the shared vocabulary between the catalogs, the scoring engine,
//! the eligibility engine, and the frontend collaborators.

pub mod models;
