use lazy_static::lazy_static;

use crate::constants::{COMMON_WORDS, WORD_TERMINATORS};
use crate::structs::{Candidate, RankedCandidate};

lazy_static! {
    /// `" the "`, `" the."`, `" the,"`, ... for every common word.
    static ref PATTERNS: Vec<String> = COMMON_WORDS
        .iter()
        .flat_map(|word| {
            WORD_TERMINATORS
                .iter()
                .map(move |end| format!(" {}{}", word, end))
        })
        .collect();
}

/// Counts common English words in `text`, case-insensitively.
///
/// A word counts when it is preceded by a space (or opens the text) and
/// followed by a space, period or comma. Occurrences do not overlap.
pub fn score(text: &str) -> usize {
    let haystack = format!(" {}", text.to_lowercase());

    PATTERNS
        .iter()
        .map(|pattern| haystack.matches(pattern.as_str()).count())
        .sum()
}

/// Scores each candidate, drops the ones scoring zero and sorts the rest
/// from most to least likely. Ties go to the higher shift.
pub fn rank(candidates: &[Candidate]) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .filter_map(|candidate| {
            let score = score(&candidate.text);
            (score > 0).then(|| RankedCandidate {
                score,
                shift: candidate.shift,
                text: candidate.text.clone(),
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.cmp(a));

    ranked
}
