//! Line candidates and their deduplicating store.

use crate::descriptor::LineDescriptor;
use crate::grid::{Point, Shape};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCandidate {
    /// Canonical endpoints of the run.
    pub descriptor: LineDescriptor,
    /// Serialized descriptor, the deduplication key.
    pub text: String,
    /// Covered grid points, sorted.
    pub points: Vec<Point>,
    /// Covered point count minus descriptor length.
    pub savings: isize,
}

impl LineCandidate {
    /// Build a candidate from a sorted, non-empty point set.
    pub fn new(character: char, shape: Shape, points: Vec<Point>) -> Self {
        let start = points.first().cloned().unwrap_or_default();
        let end = points.last().cloned().unwrap_or_default();
        let descriptor = LineDescriptor {
            character,
            shape,
            start,
            end,
        };
        let text = descriptor.to_string();
        let savings = points.len() as isize - text.chars().count() as isize;
        Self {
            descriptor,
            text,
            points,
            savings,
        }
    }

    /// Flat positions covered, under this candidate's own shape.
    pub fn flat_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.points
            .iter()
            .map(|p| self.descriptor.shape.flat_index(p))
    }
}

/// Merges candidate batches, keeping the first candidate per descriptor.
#[derive(Debug, Default)]
pub struct CandidateStore {
    seen: HashSet<String>,
    candidates: Vec<LineCandidate>,
}

impl CandidateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the candidate was new.
    pub fn insert(&mut self, candidate: LineCandidate) -> bool {
        if self.seen.contains(&candidate.text) {
            return false;
        }
        self.seen.insert(candidate.text.clone());
        self.candidates.push(candidate);
        true
    }

    pub fn extend<I: IntoIterator<Item = LineCandidate>>(&mut self, batch: I) {
        for candidate in batch {
            self.insert(candidate);
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates in discovery order.
    pub fn into_candidates(self) -> Vec<LineCandidate> {
        self.candidates
    }
}
