use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::EXECUTION_TIME_SENTINEL_SECS;

/// Severity of situation a script is designed to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    None,
    Moderate,
    Severe,
}

impl IntensityLevel {
    pub const ALL: [IntensityLevel; 3] = [
        IntensityLevel::None,
        IntensityLevel::Moderate,
        IntensityLevel::Severe,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IntensityLevel::None => "none",
            IntensityLevel::Moderate => "moderate",
            IntensityLevel::Severe => "severe",
        }
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One advice script in the catalog.
///
/// Records are immutable inputs: a ranking call never mutates or copies
/// one, it only returns references in a new order. Everything beyond
/// `id`, `title`, and `category` is optional metadata — a record missing
/// a field simply doesn't qualify for the bonuses that depend on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Free-text description of the triggering scenario.
    #[serde(default)]
    pub situation_trigger: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Expected time to execute the advice, in seconds.
    #[serde(default)]
    pub execution_time_secs: Option<u32>,
    /// Severity the script is designed to handle.
    #[serde(default)]
    pub intensity: Option<IntensityLevel>,
    #[serde(default)]
    pub location_tags: Vec<String>,
    #[serde(default)]
    pub works_in_public: Option<bool>,
    /// Caregiver emotional states the script targets, e.g. "frustrated".
    #[serde(default)]
    pub caregiver_state_tags: Vec<String>,
    #[serde(default)]
    pub emergency_suitable: Option<bool>,
}

impl ScriptRecord {
    /// The script declares an execution time within the given budget.
    pub fn fits_time_budget(&self, max_secs: u32) -> bool {
        self.execution_time_secs.is_some_and(|t| t <= max_secs)
    }

    /// The script declares it handles the given intensity level.
    pub fn handles_intensity(&self, level: IntensityLevel) -> bool {
        self.intensity == Some(level)
    }

    /// The script carries a location tag (case-insensitive).
    pub fn tagged_for_location(&self, tag: &str) -> bool {
        self.location_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// The script targets a caregiver emotional state (case-insensitive).
    pub fn suits_caregiver_state(&self, state: &str) -> bool {
        self.caregiver_state_tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(state))
    }

    pub fn is_emergency_suitable(&self) -> bool {
        self.emergency_suitable.unwrap_or(false)
    }

    pub fn usable_in_public(&self) -> bool {
        self.works_in_public.unwrap_or(false)
    }

    /// Category lower-cased with underscores normalized to spaces, for
    /// matching against query text.
    pub fn normalized_category(&self) -> String {
        self.category.replace('_', " ").to_lowercase()
    }

    /// Sort key for execution time: records without one order last.
    pub fn execution_time_sort_key(&self) -> u32 {
        self.execution_time_secs
            .unwrap_or(EXECUTION_TIME_SENTINEL_SECS)
    }
}
