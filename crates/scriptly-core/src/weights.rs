//! Signal weight table for the relevance scorer.
//!
//! One named weight per scoring signal, so the values are tunable and
//! testable in isolation from the combination logic. Weights encode a
//! deliberate priority order: an exact situational description outranks
//! a category or tag coincidence.

use serde::{Deserialize, Serialize};

use crate::errors::WeightError;

/// Points awarded per scoring signal.
///
/// Weights are unsigned, so a malformed table can never push a score
/// negative — a TOML override carrying a negative value fails at parse
/// time rather than at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    /// Record title contains the query.
    pub title_match: u32,
    /// Situation trigger text contains the query.
    pub situation_match: u32,
    /// Normalized category contains the query.
    pub category_match: u32,
    /// Any record tag appears inside the query text.
    pub tag_match: u32,
    /// Matched problem id appears in the record's tags or category.
    pub problem_type_match: u32,
    /// Urgent query and the script executes within the fast budget.
    pub urgent_fast_execution: u32,
    /// Urgent query and the script is emergency-suitable.
    pub urgent_emergency_suitable: u32,
    /// Intense situation and the script handles severe intensity.
    pub intense_severe: u32,
    /// Intense situation and the script handles moderate intensity.
    pub intense_moderate: u32,
    /// Public situation and the script carries a "public" location tag.
    pub public_location_tag: u32,
    /// Public situation and the script is flagged as working in public.
    pub public_flag: u32,
    /// Depleted caregiver and the script targets the frustrated state.
    pub frustrated_state_tag: u32,
    /// Depleted caregiver and the script targets the exhausted state.
    pub exhausted_state_tag: u32,
    /// Depleted caregiver fallback for emergency-suitable scripts.
    pub frustrated_emergency_fallback: u32,
    /// Flat bonus applied to every record when the issue recurs.
    pub repeat_issue: u32,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            title_match: 15,
            situation_match: 25,
            category_match: 10,
            tag_match: 8,
            problem_type_match: 20,
            urgent_fast_execution: 15,
            urgent_emergency_suitable: 20,
            intense_severe: 20,
            intense_moderate: 10,
            public_location_tag: 15,
            public_flag: 10,
            frustrated_state_tag: 20,
            exhausted_state_tag: 15,
            frustrated_emergency_fallback: 10,
            repeat_issue: 5,
        }
    }
}

impl SignalWeights {
    /// Load overrides from TOML. Unspecified fields keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, WeightError> {
        Ok(toml::from_str(raw)?)
    }
}
