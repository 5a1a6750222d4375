use serde::{Deserialize, Serialize};

use crate::vocabulary::ProblemId;

/// Situational context inferred from one query.
///
/// Built fresh at the start of a ranking call and discarded when the
/// call returns; never persisted. Dimensions are independent — several
/// can be true at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SituationContext {
    /// The caregiver needs something that works right now.
    pub is_urgent: bool,
    /// The situation has escalated (screaming, hitting, out of control).
    pub is_intense: bool,
    /// The situation is happening somewhere public.
    pub is_public: bool,
    /// The caregiver reports a recurring issue.
    pub is_repeat: bool,
    /// The caregiver sounds emotionally depleted.
    pub caregiver_frustrated: bool,
    /// Canonical problem the query describes, if any synonym matched.
    pub matched_problem: Option<ProblemId>,
}
