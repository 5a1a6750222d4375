//! Built-in vocabulary tables.
//!
//! Phrases are written lower-cased because matching is substring
//! containment against the lower-cased query. Multi-word phrases are
//! order-sensitive: "won't eat" matches "she won't eat dinner" but not
//! "she eats, won't she". Problem entries are ordered most-acute first —
//! the matcher stops at the first hit.

use super::{ContextKeywords, ProblemEntry, ProblemId, Vocabulary};

fn entry(id: &str, phrases: &[&str]) -> ProblemEntry {
    ProblemEntry {
        id: ProblemId::new(id),
        phrases: phrases.iter().map(|p| (*p).to_string()).collect(),
    }
}

fn set(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|p| (*p).to_string()).collect()
}

/// The compiled-in problem-synonym table.
pub fn builtin_problems() -> Vec<ProblemEntry> {
    vec![
        entry(
            "meltdown",
            &[
                "meltdown",
                "melt down",
                "losing it",
                "lost it",
                "out of control",
                "freaking out",
                "hysterical",
                "total breakdown",
                "screaming fit",
                "tantrum",
            ],
        ),
        entry(
            "aggression",
            &[
                "hitting",
                "biting",
                "kicking",
                "throwing things",
                "hurting",
                "aggressive",
                "lashing out",
            ],
        ),
        entry(
            "bedtime",
            &[
                "bedtime",
                "won't sleep",
                "wont sleep",
                "won't go to bed",
                "wont go to bed",
                "won't stay in bed",
                "night waking",
                "staying up",
                "fighting sleep",
                "sleep",
            ],
        ),
        entry(
            "transitions",
            &[
                "transition",
                "time to go",
                "time to leave",
                "leaving the park",
                "won't stop playing",
                "switching activities",
                "turning off",
                "getting out the door",
            ],
        ),
        entry(
            "picky_eating",
            &[
                "won't eat",
                "wont eat",
                "picky eater",
                "picky eating",
                "refuses food",
                "refusing to eat",
                "mealtime battle",
                "spits out",
            ],
        ),
        entry(
            "public_behavior",
            &[
                "grocery store",
                "in the store",
                "at the store",
                "restaurant",
                "acting up in public",
                "embarrassing",
                "checkout line",
            ],
        ),
        entry(
            "morning_routine",
            &[
                "morning routine",
                "getting dressed",
                "getting ready",
                "school morning",
                "won't get up",
                "wont get up",
                "running late",
            ],
        ),
        entry(
            "screen_time",
            &[
                "screen time",
                "screentime",
                "tablet",
                "ipad",
                "video games",
                "turn off the tv",
                "youtube",
            ],
        ),
        entry(
            "sibling_conflict",
            &[
                "sibling",
                "brother",
                "sister",
                "fighting with each other",
                "won't share",
                "wont share",
                "taking toys",
            ],
        ),
        entry(
            "homework",
            &[
                "homework",
                "school work",
                "schoolwork",
                "refuses to study",
                "won't do his work",
                "won't do her work",
            ],
        ),
    ]
}

/// The compiled-in context keyword sets, one per situational dimension.
pub fn builtin_context_keywords() -> ContextKeywords {
    ContextKeywords {
        urgency: set(&[
            "right now",
            "happening now",
            "immediately",
            "urgent",
            "emergency",
            "asap",
            "in the middle of",
            "currently",
            "help me now",
        ]),
        intensity: set(&[
            "screaming",
            "hitting",
            "kicking",
            "throwing",
            "violent",
            "extreme",
            "severe",
            "out of control",
            "full meltdown",
            "inconsolable",
        ]),
        location: set(&[
            "store",
            "public",
            "restaurant",
            "park",
            "church",
            "school pickup",
            "in front of everyone",
            "grocery",
            "waiting room",
        ]),
        frequency: set(&[
            "again",
            "always",
            "every time",
            "every day",
            "every night",
            "every morning",
            "keeps",
            "constantly",
            "over and over",
        ]),
        caregiver_state: set(&[
            "exhausted",
            "so tired",
            "fed up",
            "can't take",
            "cant take",
            "losing my mind",
            "at my wits end",
            "at my wit's end",
            "frustrated",
            "done with this",
            "burnt out",
            "burned out",
            "overwhelmed",
            "i give up",
        ]),
    }
}

/// The compiled-in emergency keyword set. Deliberately narrower than the
/// urgency dimension: these phrases flip the caller's crisis-mode
/// banner, not just a ranking bonus.
pub fn builtin_emergency_keywords() -> Vec<String> {
    set(&[
        "meltdown right now",
        "hurting himself",
        "hurting herself",
        "hurting themselves",
        "self harm",
        "self-harm",
        "head banging",
        "banging his head",
        "banging her head",
        "running into the street",
        "ran away",
        "running away right now",
        "danger",
        "emergency",
        "crisis",
        "call for help",
    ])
}

/// The full compiled-in vocabulary.
pub fn builtin_vocabulary() -> Vocabulary {
    Vocabulary {
        problems: builtin_problems(),
        context_keywords: builtin_context_keywords(),
        emergency_keywords: builtin_emergency_keywords(),
    }
}
