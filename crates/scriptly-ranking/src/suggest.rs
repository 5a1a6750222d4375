//! Autocomplete suggestions over problem-synonym phrasings.

use scriptly_core::constants::{MAX_SUGGESTIONS, MIN_SUGGESTION_QUERY_LEN};
use scriptly_core::vocabulary::ProblemEntry;

/// Collect up to [`MAX_SUGGESTIONS`] phrasings containing the partial
/// query as a substring.
///
/// Order is table order, then phrase-list order — deterministic and
/// intentionally lighter than ranking; no scoring is involved. Returns
/// the phrasings themselves, not the canonical ids, deduplicated on
/// first occurrence. Partial queries shorter than
/// [`MIN_SUGGESTION_QUERY_LEN`] characters yield nothing.
pub fn suggest(partial: &str, problems: &[ProblemEntry]) -> Vec<String> {
    if partial.chars().count() < MIN_SUGGESTION_QUERY_LEN {
        return Vec::new();
    }
    let needle = partial.to_lowercase();

    let mut suggestions: Vec<String> = Vec::new();
    for entry in problems {
        for phrase in &entry.phrases {
            if phrase.contains(&needle) && !suggestions.contains(phrase) {
                suggestions.push(phrase.clone());
                if suggestions.len() == MAX_SUGGESTIONS {
                    return suggestions;
                }
            }
        }
    }
    suggestions
}
