//! Emergency classification: pure keyword membership.
//!
//! No dependency on catalog or context — the caller consults this for
//! the crisis-mode banner, independently of ranking.

/// True iff the lower-cased query contains any emergency phrase as a
/// substring.
pub fn is_emergency(query: &str, emergency_keywords: &[String]) -> bool {
    let q = query.to_lowercase();
    emergency_keywords.iter().any(|p| q.contains(p.as_str()))
}
