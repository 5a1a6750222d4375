//! Problem matching: query text → canonical problem identifier.

use scriptly_core::vocabulary::{ProblemEntry, ProblemId};

/// Match the query against the problem-synonym table.
///
/// Entries are scanned in table order and the first phrase hit wins, so
/// a query that could describe several problems resolves to the entry
/// defined first — reproducible across calls because the table is a
/// `Vec`, not a hash map. Returns `None` when nothing matches.
pub fn match_problem(query: &str, problems: &[ProblemEntry]) -> Option<ProblemId> {
    let q = query.to_lowercase();
    problems
        .iter()
        .find(|entry| entry.phrases.iter().any(|p| q.contains(p.as_str())))
        .map(|entry| entry.id.clone())
}
