//! Progress reporting hooks for long compression runs.
//!
//! The engine reports milestones to a [`ProgressSink`] supplied by the
//! caller. Sinks only observe; they cannot influence the result. All events
//! are delivered from the thread that called the engine.

/// Stages of a compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    CandidateGeneration,
    Selection,
    BlueprintAssembly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    PhaseStarted(Phase),
    PhaseFinished(Phase),
    /// All shapes have been scanned for `character`; `ordinal` is 1-based.
    CharacterScanned {
        character: char,
        ordinal: usize,
        total: usize,
    },
    CandidatesGenerated { shapes: usize, candidates: usize },
    LinesCommitted { committed: usize, claimed: usize },
}

pub trait ProgressSink {
    fn report(&self, event: &Progress);
}

impl<F: Fn(&Progress)> ProgressSink for F {
    fn report(&self, event: &Progress) {
        self(event)
    }
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _event: &Progress) {}
}
