//! Greedy, position-disjoint selection of line candidates.
//!
//! Candidates are taken in descending order of savings (stable, so
//! discovery order breaks ties) and committed whenever every flat position
//! they cover is still free. No backtracking: the result is a greedy
//! approximation and callers rely on its exact order.

use crate::candidate::LineCandidate;

/// Flat positions already claimed by committed lines. Positions are only
/// ever set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSet {
    claimed: Vec<bool>,
}

impl ClaimSet {
    pub fn new(length: usize) -> Self {
        Self {
            claimed: vec![false; length],
        }
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }

    pub fn is_claimed(&self, index: usize) -> bool {
        self.claimed.get(index).copied().unwrap_or(false)
    }

    /// `true` if every index is in range and unclaimed.
    pub fn all_free<I: IntoIterator<Item = usize>>(&self, indices: I) -> bool {
        indices
            .into_iter()
            .all(|i| i < self.claimed.len() && !self.claimed[i])
    }

    fn claim<I: IntoIterator<Item = usize>>(&mut self, indices: I) {
        for i in indices {
            self.claimed[i] = true;
        }
    }

    pub fn claimed_count(&self) -> usize {
        self.claimed.iter().filter(|&&c| c).count()
    }

    /// Unclaimed positions in ascending order.
    pub fn free_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.claimed
            .iter()
            .enumerate()
            .filter(|&(_, &c)| !c)
            .map(|(i, _)| i)
    }
}

/// Outcome of a selection pass.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Committed candidates in commit order.
    pub committed: Vec<LineCandidate>,
    pub claims: ClaimSet,
}

/// Greedily commit non-overlapping candidates over `length` positions.
pub fn select_lines(mut candidates: Vec<LineCandidate>, length: usize) -> Selection {
    candidates.sort_by_key(|c| std::cmp::Reverse(c.savings));

    let mut claims = ClaimSet::new(length);
    let mut committed = Vec::new();
    for candidate in candidates {
        if !claims.all_free(candidate.flat_indices()) {
            continue;
        }
        claims.claim(candidate.flat_indices());
        log::trace!("committed {} (savings {})", candidate.text, candidate.savings);
        committed.push(candidate);
    }

    Selection { committed, claims }
}
