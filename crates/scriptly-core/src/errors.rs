/// Vocabulary table definition errors.
///
/// Tables are validated when they are built, not per query: the engine's
/// entry points themselves are total.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("failed to parse vocabulary TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("problem entry '{id}' has an empty phrase list")]
    EmptyPhraseList { id: String },

    #[error("duplicate problem id '{id}'")]
    DuplicateProblem { id: String },
}

/// Signal weight table errors.
#[derive(Debug, thiserror::Error)]
pub enum WeightError {
    /// Covers malformed TOML and out-of-range values: weights are
    /// unsigned, so a negative override fails here rather than ever
    /// reaching the scorer.
    #[error("failed to parse weights TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
