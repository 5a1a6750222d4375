//! # scriptly-core
//!
//! Foundation crate for the Scriptly contextual ranking engine.
//! Defines record and context types, vocabulary tables, signal weights,
//! errors, and constants. Every other crate in the workspace depends on this.

pub mod constants;
pub mod context;
pub mod errors;
pub mod record;
pub mod vocabulary;
pub mod weights;

// Re-export the most commonly used types at the crate root.
pub use context::SituationContext;
pub use errors::{VocabularyError, WeightError};
pub use record::{IntensityLevel, ScriptRecord};
pub use vocabulary::{ContextKeywords, ProblemEntry, ProblemId, Vocabulary};
pub use weights::SignalWeights;
