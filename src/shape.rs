//! Enumeration of the projection shapes scanned for a given text length.
//!
//! Planar shapes pad the text to `width * ceil(length / width)`; volumetric
//! shapes are exact factorizations of the length and never pad.

use crate::config::EngineConfig;
use crate::grid::Shape;
use std::collections::BTreeSet;

/// Shapes to scan for a text of `length` characters, in scan order.
pub fn enumerate_shapes(length: usize, config: &EngineConfig) -> Vec<Shape> {
    if length == 0 {
        return Vec::new();
    }
    if config.dimensionality.is_planar() {
        planar_shapes(length, &config.common_widths)
    } else {
        volumetric_shapes(length, config.dimensionality.axes(), config.max_shapes)
    }
}

/// `[height, width]` for every divisor of `length` and every common width
/// that fits, ascending by width.
pub fn planar_shapes(length: usize, common_widths: &[usize]) -> Vec<Shape> {
    let mut widths: BTreeSet<usize> = divisors(length).into_iter().collect();
    widths.extend(common_widths.iter().copied().filter(|&w| w > 0));
    widths
        .into_iter()
        .filter(|&w| w <= length)
        .map(|w| Shape::new(vec![length.div_ceil(w), w]))
        .collect()
}

/// Non-decreasing `axes`-tuples whose product is exactly `length`,
/// lexicographically ordered and capped at `max_shapes`.
pub fn volumetric_shapes(length: usize, axes: usize, max_shapes: usize) -> Vec<Shape> {
    let mut out = Vec::new();
    let mut prefix = Vec::with_capacity(axes);
    factor_into(length, axes, 1, &mut prefix, &mut out, max_shapes);
    out
}

fn factor_into(
    remaining: usize,
    axes: usize,
    min_factor: usize,
    prefix: &mut Vec<usize>,
    out: &mut Vec<Shape>,
    cap: usize,
) {
    if out.len() >= cap {
        return;
    }
    if axes == 1 {
        if remaining >= min_factor {
            let mut extents = prefix.clone();
            extents.push(remaining);
            out.push(Shape::new(extents));
        }
        return;
    }
    // The smallest of the remaining `axes` factors is at most the
    // `axes`-th root of what is left.
    let mut factor = min_factor;
    while factor.checked_pow(axes as u32).is_some_and(|p| p <= remaining) {
        if remaining % factor == 0 {
            prefix.push(factor);
            factor_into(remaining / factor, axes - 1, factor, prefix, out, cap);
            prefix.pop();
        }
        factor += 1;
    }
}

/// All divisors of `n` in ascending order.
pub fn divisors(n: usize) -> Vec<usize> {
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut i = 1usize;
    while i.checked_mul(i).is_some_and(|sq| sq <= n) {
        if n % i == 0 {
            low.push(i);
            if i != n / i {
                high.push(n / i);
            }
        }
        i += 1;
    }
    low.extend(high.into_iter().rev());
    low
}
