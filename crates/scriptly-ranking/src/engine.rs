//! RankingEngine: orchestrates the query pipeline.
//!
//! rank: extract context → match problem → score candidates → order.
//! suggest and is_emergency are independent entry points consumed by UI
//! affordances (autocomplete dropdown, crisis banner); they do not feed
//! back into ranking.

use scriptly_core::{ScriptRecord, SignalWeights, Vocabulary};
use tracing::{debug, info};

use crate::emergency;
use crate::ranking::{self, RankedScript};
use crate::suggest;

/// The main ranking engine.
///
/// Borrows read-only vocabulary tables built once at startup. Every
/// entry point is a pure function of its inputs and takes `&self`, so a
/// single engine serves concurrent callers without locking.
pub struct RankingEngine<'v> {
    vocabulary: &'v Vocabulary,
    weights: SignalWeights,
}

impl<'v> RankingEngine<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self {
            vocabulary,
            weights: SignalWeights::default(),
        }
    }

    /// Replace the default signal weights, e.g. with TOML overrides.
    pub fn with_weights(mut self, weights: SignalWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Rank candidates for a caregiver query.
    ///
    /// An empty (after trimming) query is browsing mode: every candidate
    /// comes back in its original order. A non-empty query drops
    /// zero-score candidates, so a query that matches nothing returns an
    /// empty list. Records are returned by reference — the engine never
    /// copies or mutates them.
    pub fn rank<'r>(&self, query: &str, candidates: &'r [ScriptRecord]) -> Vec<&'r ScriptRecord> {
        self.rank_scored(query, candidates)
            .into_iter()
            .map(|ranked| ranked.record)
            .collect()
    }

    /// Rank with scores and match reasons attached, for diagnostics and
    /// tests. Browsing mode (empty query) yields every candidate with a
    /// zero score and no reasons.
    pub fn rank_scored<'r>(
        &self,
        query: &str,
        candidates: &'r [ScriptRecord],
    ) -> Vec<RankedScript<'r>> {
        if query.trim().is_empty() {
            debug!(candidates = candidates.len(), "empty query, browsing mode");
            return candidates
                .iter()
                .map(|record| RankedScript {
                    record,
                    score: 0,
                    reasons: Vec::new(),
                })
                .collect();
        }

        let (context, ranked) =
            ranking::rank_candidates(query, candidates, self.vocabulary, &self.weights);
        debug!(?context, "extracted situation context");
        info!(
            candidates = candidates.len(),
            ranked = ranked.len(),
            "ranking complete"
        );
        ranked
    }

    /// Autocomplete phrasings for a partial query. At most five results,
    /// none below two characters of input.
    pub fn suggest(&self, partial: &str) -> Vec<String> {
        suggest::suggest(partial, &self.vocabulary.problems)
    }

    /// Crisis-mode classification. Pure function of the query and the
    /// emergency keyword set; unaffected by any candidate list.
    pub fn is_emergency(&self, query: &str) -> bool {
        emergency::is_emergency(query, &self.vocabulary.emergency_keywords)
    }
}
