use serde::{Deserialize, Serialize};

/// A Caesar cipher with a fixed shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    pub shift: i32,
}

/// One brute-force attempt: the shift tried and what it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub shift: i32,
    pub text: String,
}

/// A candidate that matched at least one common word.
///
/// Field order matters: the derived `Ord` compares score, then shift,
/// then text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub score: usize,
    pub shift: i32,
    pub text: String,
}
