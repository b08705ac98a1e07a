use std::cmp::Ordering;

use super::types::Outcome;

/// A search result: the outcome for the searching side plus the ply at which
/// it was reached.
///
/// Ordering is `Win > Draw > Loss`. Wins reached in fewer plies rank higher,
/// losses reached in more plies rank higher, and draws compare equal at any
/// depth. Equality follows the same rule, so `PartialEq` is not derived.
#[derive(Debug, Clone, Copy)]
pub struct Score {
    pub outcome: Outcome,
    pub depth: usize,
}

impl Score {
    pub fn new(outcome: Outcome, depth: usize) -> Self {
        Self { outcome, depth }
    }

    /// Smallest possible score.
    pub fn floor() -> Self {
        Self::new(Outcome::Loss, 0)
    }

    /// Largest possible score.
    pub fn ceiling() -> Self {
        Self::new(Outcome::Win, 0)
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.outcome
            .rank()
            .cmp(&other.outcome.rank())
            .then_with(|| match self.outcome {
                Outcome::Win => other.depth.cmp(&self.depth),
                Outcome::Loss => self.depth.cmp(&other.depth),
                Outcome::Draw => Ordering::Equal,
            })
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}
