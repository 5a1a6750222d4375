//! Ranking pipeline: extract context → match problem → score → order.

pub mod scorer;

use std::cmp::Reverse;

use scriptly_core::{ScriptRecord, SignalWeights, SituationContext, Vocabulary};

use crate::problem;
use crate::situation;
use scorer::MatchReason;

/// A candidate paired with its score and the reasons that produced it.
///
/// The plain `rank` entry point returns bare record references; this
/// form stays inspectable for diagnostics and tests.
#[derive(Debug, Clone)]
pub struct RankedScript<'r> {
    pub record: &'r ScriptRecord,
    pub score: u32,
    pub reasons: Vec<MatchReason>,
}

/// Score and order candidates for a non-empty query.
///
/// Zero-score candidates are dropped. Ties break toward
/// emergency-suitable records, then toward shorter execution time, with
/// records that declare no execution time ordering last. The sort is
/// stable, so full ties keep their input order.
pub fn rank_candidates<'r>(
    query: &str,
    candidates: &'r [ScriptRecord],
    vocabulary: &Vocabulary,
    weights: &SignalWeights,
) -> (SituationContext, Vec<RankedScript<'r>>) {
    let query_lower = query.to_lowercase();
    let mut context = situation::extract(query, &vocabulary.context_keywords);
    context.matched_problem = problem::match_problem(query, &vocabulary.problems);

    let mut ranked: Vec<RankedScript<'r>> = candidates
        .iter()
        .filter_map(|record| {
            let (score, reasons) = scorer::score(&query_lower, &context, record, weights);
            (score > 0).then_some(RankedScript {
                record,
                score,
                reasons,
            })
        })
        .collect();

    ranked.sort_by_key(|r| {
        (
            Reverse(r.score),
            Reverse(r.record.is_emergency_suitable()),
            r.record.execution_time_sort_key(),
        )
    });

    (context, ranked)
}
