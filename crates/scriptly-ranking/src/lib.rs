//! # scriptly-ranking
//!
//! Contextual query ranking engine for the advice-script catalog.
//! Given a free-text caregiver query, the engine infers the situation
//! (urgency, intensity, publicness, recurrence, caregiver state),
//! matches a canonical problem, and ranks catalog records by fitness
//! for that situation rather than by raw text match.
//!
//! Everything here is synchronous and allocation-light: vocabulary
//! tables are borrowed read-only, every entry point is a pure function
//! of its inputs, and no state survives a call.

pub mod emergency;
pub mod engine;
pub mod problem;
pub mod ranking;
pub mod situation;
pub mod suggest;

pub use engine::RankingEngine;
pub use ranking::scorer::MatchReason;
pub use ranking::RankedScript;
