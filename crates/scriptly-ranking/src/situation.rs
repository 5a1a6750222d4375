//! Situation extraction: query text → [`SituationContext`].

use scriptly_core::vocabulary::ContextKeywords;
use scriptly_core::SituationContext;

/// True iff any phrase in the set is a substring of the query.
///
/// Pure containment — no stemming, no tokenization. Multi-word phrases
/// are order-sensitive.
fn any_phrase_hit(query_lower: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|p| query_lower.contains(p.as_str()))
}

/// Extract the situational context from a raw query.
///
/// Each dimension is true iff the lower-cased query contains at least
/// one of that dimension's trigger phrases; dimensions are independent.
/// Never fails: an empty or unrecognized query yields an all-false
/// context. `matched_problem` is filled in by the problem matcher, not
/// here.
pub fn extract(query: &str, keywords: &ContextKeywords) -> SituationContext {
    let q = query.to_lowercase();
    SituationContext {
        is_urgent: any_phrase_hit(&q, &keywords.urgency),
        is_intense: any_phrase_hit(&q, &keywords.intensity),
        is_public: any_phrase_hit(&q, &keywords.location),
        is_repeat: any_phrase_hit(&q, &keywords.frequency),
        caregiver_frustrated: any_phrase_hit(&q, &keywords.caregiver_state),
        matched_problem: None,
    }
}
