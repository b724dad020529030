//! Compression pipeline: shapes, line discovery, selection, blueprint.

use crate::blueprint::Blueprint;
use crate::candidate::{CandidateStore, LineCandidate};
use crate::config::EngineConfig;
use crate::descriptor::is_reserved;
use crate::grid::Grid;
use crate::line_finder::find_lines;
use crate::progress::{NoProgress, Phase, Progress, ProgressSink};
use crate::select::select_lines;
use crate::shape::enumerate_shapes;
use rayon::prelude::*;

/// Compress `text` over planar projections.
pub fn compress(text: &str) -> Blueprint {
    compress_with(text, &EngineConfig::default(), &NoProgress)
}

/// Compress `text` with an explicit configuration and progress sink.
pub fn compress_with(text: &str, config: &EngineConfig, sink: &dyn ProgressSink) -> Blueprint {
    let chars: Vec<char> = text.chars().collect();
    let candidates = generate_candidates(&chars, config, sink);

    sink.report(&Progress::PhaseStarted(Phase::Selection));
    let selection = select_lines(candidates, chars.len());
    sink.report(&Progress::LinesCommitted {
        committed: selection.committed.len(),
        claimed: selection.claims.claimed_count(),
    });
    sink.report(&Progress::PhaseFinished(Phase::Selection));
    log::debug!(
        "committed {} lines claiming {} of {} positions",
        selection.committed.len(),
        selection.claims.claimed_count(),
        chars.len()
    );

    sink.report(&Progress::PhaseStarted(Phase::BlueprintAssembly));
    let blueprint = Blueprint::from_selection(&chars, &selection);
    sink.report(&Progress::PhaseFinished(Phase::BlueprintAssembly));
    blueprint
}

/// Characters eligible for lines, in order of first appearance.
pub fn scan_characters(text: &[char]) -> Vec<char> {
    let mut seen = std::collections::HashSet::new();
    text.iter()
        .copied()
        .filter(|&c| !is_reserved(c) && seen.insert(c))
        .collect()
}

/// Every deduplicated line candidate of `text`, in discovery order.
pub fn generate_candidates(
    text: &[char],
    config: &EngineConfig,
    sink: &dyn ProgressSink,
) -> Vec<LineCandidate> {
    sink.report(&Progress::PhaseStarted(Phase::CandidateGeneration));

    let grids: Vec<Grid> = enumerate_shapes(text.len(), config)
        .into_iter()
        .map(|shape| Grid::project(text, shape))
        .collect();
    let characters = scan_characters(text);
    log::debug!(
        "scanning {} characters over {} shapes",
        characters.len(),
        grids.len()
    );

    let mut store = CandidateStore::new();
    for (i, &character) in characters.iter().enumerate() {
        let batches: Vec<Vec<LineCandidate>> = if config.parallel {
            grids.par_iter().map(|g| find_lines(g, character)).collect()
        } else {
            grids.iter().map(|g| find_lines(g, character)).collect()
        };
        store.extend(batches.into_iter().flatten());
        sink.report(&Progress::CharacterScanned {
            character,
            ordinal: i + 1,
            total: characters.len(),
        });
    }

    sink.report(&Progress::CandidatesGenerated {
        shapes: grids.len(),
        candidates: store.len(),
    });
    sink.report(&Progress::PhaseFinished(Phase::CandidateGeneration));
    store.into_candidates()
}
