//! Result ordering
//!
//! Words are ordered by syllable count, fewest first, and alphabetically
//! within the same count.

use std::cmp::Ordering;

use crate::types::WordResult;

fn compare(a: &WordResult, b: &WordResult) -> Ordering {
    a.syllables()
        .cmp(&b.syllables())
        .then_with(|| a.word.cmp(&b.word))
}

/// Sort results in place by syllable count, then word
pub fn sort_results(results: &mut [WordResult]) {
    results.sort_by(compare);
}

/// Check that every adjacent pair is in syllable/word order
pub fn is_sorted(results: &[WordResult]) -> bool {
    results
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}
