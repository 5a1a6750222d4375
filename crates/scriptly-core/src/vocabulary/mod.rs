//! Vocabulary tables: problem synonyms, context keyword sets, and the
//! emergency keyword set.
//!
//! Tables are built once at startup — either the compiled-in defaults or
//! a TOML substitute — and shared read-only across callers. Problem
//! entries keep their defined order: the matcher returns the first entry
//! that hits, so order is part of the contract.

pub mod defaults;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::VocabularyError;

/// Canonical identifier for "what kind of situation" a query describes,
/// independent of the caregiver's exact wording. Snake_case by
/// convention, e.g. `meltdown`, `picky_eating`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemId(String);

impl ProblemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier with underscores replaced by spaces, for matching
    /// against human-facing tags and categories.
    pub fn display_form(&self) -> String {
        self.0.replace('_', " ")
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One problem-synonym table entry: a canonical id and the phrasings
/// caregivers actually use for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemEntry {
    pub id: ProblemId,
    pub phrases: Vec<String>,
}

/// Trigger phrase sets for the five situational dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextKeywords {
    pub urgency: Vec<String>,
    pub intensity: Vec<String>,
    pub location: Vec<String>,
    pub frequency: Vec<String>,
    pub caregiver_state: Vec<String>,
}

/// The full vocabulary: ordered problem synonyms, context keyword sets,
/// and emergency keywords. All phrases are stored lower-cased so query
/// matching folds case exactly once, on the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub problems: Vec<ProblemEntry>,
    #[serde(default)]
    pub context_keywords: ContextKeywords,
    #[serde(default)]
    pub emergency_keywords: Vec<String>,
}

impl Vocabulary {
    /// The compiled-in tables.
    pub fn builtin() -> Self {
        defaults::builtin_vocabulary()
    }

    /// Load a substitute vocabulary from TOML.
    pub fn from_toml_str(raw: &str) -> Result<Self, VocabularyError> {
        let vocabulary: Vocabulary = toml::from_str(raw)?;
        vocabulary.validated()
    }

    /// Validate the tables and lower-case every phrase.
    ///
    /// Rejects duplicate problem ids and empty phrase lists; either
    /// would make matching results depend on accidents of table layout.
    pub fn validated(mut self) -> Result<Self, VocabularyError> {
        let mut seen: HashSet<ProblemId> = HashSet::new();
        for entry in &mut self.problems {
            if entry.phrases.is_empty() {
                return Err(VocabularyError::EmptyPhraseList {
                    id: entry.id.as_str().to_string(),
                });
            }
            if !seen.insert(entry.id.clone()) {
                return Err(VocabularyError::DuplicateProblem {
                    id: entry.id.as_str().to_string(),
                });
            }
            lowercase_in_place(&mut entry.phrases);
        }
        lowercase_in_place(&mut self.context_keywords.urgency);
        lowercase_in_place(&mut self.context_keywords.intensity);
        lowercase_in_place(&mut self.context_keywords.location);
        lowercase_in_place(&mut self.context_keywords.frequency);
        lowercase_in_place(&mut self.context_keywords.caregiver_state);
        lowercase_in_place(&mut self.emergency_keywords);
        Ok(self)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

fn lowercase_in_place(phrases: &mut [String]) {
    for phrase in phrases {
        if phrase.chars().any(|c| c.is_uppercase()) {
            *phrase = phrase.to_lowercase();
        }
    }
}
