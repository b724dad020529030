use crate::blueprint::Blueprint;
use crate::config::DEFAULT_DECODE_LIMIT;
use crate::raster::rasterize;
use crate::TessellationError;
use std::collections::BTreeMap;

/// Repaint a blueprint into the text it was built from.
///
/// Each descriptor is rasterized onto a canvas of `original_length` slots;
/// indices outside the canvas are skipped. Decoded descriptors never step
/// more than `original_length` times. Remaining empty slots are then
/// filled from the remnant stream in order. If the remnant runs out, the
/// unfilled slots are dropped from the output.
///
/// The canvas only stores painted slots, so memory follows the key and the
/// remnant rather than the declared length.
pub fn reconstruct(blueprint: &Blueprint) -> String {
    let length = blueprint.original_length;
    let mut canvas: BTreeMap<usize, char> = BTreeMap::new();

    for line in &blueprint.key {
        for point in rasterize(&line.start, &line.end) {
            match line.shape.checked_flat_index(&point) {
                Some(index) if index < length => {
                    canvas.insert(index, line.character);
                }
                _ => {}
            }
        }
    }

    let mut remnant = blueprint.remnant.chars();
    let mut out = String::with_capacity(blueprint.remnant.len() + canvas.len());
    let mut position = 0usize;
    for (&index, &character) in &canvas {
        out.extend(remnant.by_ref().take(index - position));
        out.push(character);
        position = index + 1;
    }
    out.extend(remnant.take(length - position));
    out
}

/// Decode a blueprint, refusing declared lengths above `limit`.
pub fn decompress_with_limit(wire: &str, limit: usize) -> Result<String, TessellationError> {
    let blueprint = Blueprint::decode(wire)?;
    if blueprint.original_length > limit {
        return Err(TessellationError::LimitExceeded {
            length: blueprint.original_length,
            limit,
        });
    }
    log::debug!(
        "reconstructing {} characters from {} lines",
        blueprint.original_length,
        blueprint.key.len()
    );
    Ok(reconstruct(&blueprint))
}

/// Decode a blueprint declaring at most [`DEFAULT_DECODE_LIMIT`] characters.
pub fn decompress(wire: &str) -> Result<String, TessellationError> {
    decompress_with_limit(wire, DEFAULT_DECODE_LIMIT)
}
