//! Line rasterization used to replay descriptors onto a canvas.
//!
//! Planar lines use integer Bresenham stepping; higher dimensionalities use
//! equal-interval interpolation over `max |delta|` steps, rounding each
//! coordinate to nearest with ties to even. Both walk lazily, so a line's
//! length never turns into an allocation.

use crate::grid::Point;
use std::ops::RangeInclusive;

/// Points from `start` to `end` inclusive, in visiting order.
pub fn rasterize(start: &[usize], end: &[usize]) -> Raster {
    if start.len() == 2 && end.len() == 2 {
        Raster::Planar(bresenham(start, end))
    } else {
        Raster::Linear(dda(start, end))
    }
}

/// Walk over one line, picked by [`rasterize`].
#[derive(Debug, Clone)]
pub enum Raster {
    Planar(Bresenham),
    Linear(Dda),
}

impl Iterator for Raster {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        match self {
            Raster::Planar(walk) => walk.next(),
            Raster::Linear(walk) => walk.next(),
        }
    }
}

/// 8-connected planar line, each cell visited once regardless of octant.
pub fn bresenham(start: &[usize], end: &[usize]) -> Bresenham {
    let (y1, x1) = (start[0] as i128, start[1] as i128);
    let (y2, x2) = (end[0] as i128, end[1] as i128);
    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    Bresenham {
        current: (y1, x1),
        target: (y2, x2),
        delta: (dy, dx),
        step: (if y1 < y2 { 1 } else { -1 }, if x1 < x2 { 1 } else { -1 }),
        err: dx + dy,
        done: false,
    }
}

#[derive(Debug, Clone)]
pub struct Bresenham {
    current: (i128, i128),
    target: (i128, i128),
    /// `(-|dy|, |dx|)`
    delta: (i128, i128),
    step: (i128, i128),
    err: i128,
    done: bool,
}

impl Iterator for Bresenham {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let (cy, cx) = self.current;
        let point = vec![cy as usize, cx as usize];
        if self.current == self.target {
            self.done = true;
            return Some(point);
        }
        let (dy, dx) = self.delta;
        let e2 = 2 * self.err;
        if e2 >= dy {
            self.err += dy;
            self.current.1 += self.step.1;
        }
        if e2 <= dx {
            self.err += dx;
            self.current.0 += self.step.0;
        }
        Some(point)
    }
}

/// Digital differential analyzer over any number of axes.
pub fn dda(start: &[usize], end: &[usize]) -> Dda {
    let deltas = start
        .iter()
        .zip(end)
        .map(|(&a, &b)| b as f64 - a as f64)
        .collect();
    let steps = start
        .iter()
        .zip(end)
        .map(|(&a, &b)| a.abs_diff(b))
        .max()
        .unwrap_or(0);
    Dda {
        start: start.to_vec(),
        deltas,
        steps,
        remaining: 0..=steps,
    }
}

#[derive(Debug, Clone)]
pub struct Dda {
    start: Point,
    deltas: Vec<f64>,
    steps: usize,
    remaining: RangeInclusive<usize>,
}

impl Iterator for Dda {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let step = self.remaining.next()?;
        let t = if self.steps == 0 {
            0.0
        } else {
            step as f64 / self.steps as f64
        };
        Some(
            self.start
                .iter()
                .zip(&self.deltas)
                .map(|(&a, &d)| (a as f64 + d * t).round_ties_even().max(0.0) as usize)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bresenham_single_point() {
        assert_eq!(bresenham(&[2, 3], &[2, 3]).collect::<Vec<_>>(), vec![vec![2, 3]]);
    }

    #[test]
    fn bresenham_axis_and_diagonals() {
        assert_eq!(
            bresenham(&[0, 0], &[0, 3]).collect::<Vec<_>>(),
            vec![vec![0, 0], vec![0, 1], vec![0, 2], vec![0, 3]]
        );
        assert_eq!(
            bresenham(&[0, 0], &[2, 0]).collect::<Vec<_>>(),
            vec![vec![0, 0], vec![1, 0], vec![2, 0]]
        );
        assert_eq!(
            bresenham(&[0, 3], &[3, 0]).collect::<Vec<_>>(),
            vec![vec![0, 3], vec![1, 2], vec![2, 1], vec![3, 0]]
        );
    }

    #[test]
    fn bresenham_steep_line_visits_each_row_once() {
        let points: Vec<Point> = bresenham(&[0, 0], &[6, 2]).collect();
        assert_eq!(points.len(), 7);
        assert_eq!(points.first(), Some(&vec![0, 0]));
        assert_eq!(points.last(), Some(&vec![6, 2]));
        for pair in points.windows(2) {
            assert_eq!(pair[1][0], pair[0][0] + 1);
        }
    }

    #[test]
    fn dda_body_diagonal() {
        assert_eq!(
            dda(&[0, 0, 0], &[2, 2, 2]).collect::<Vec<_>>(),
            vec![vec![0, 0, 0], vec![1, 1, 1], vec![2, 2, 2]]
        );
    }

    #[test]
    fn dda_reversed_axis() {
        assert_eq!(
            dda(&[0, 3, 0], &[2, 1, 0]).collect::<Vec<_>>(),
            vec![vec![0, 3, 0], vec![1, 2, 0], vec![2, 1, 0]]
        );
    }

    #[test]
    fn dda_rounds_half_to_even() {
        // Half-way points land on the even coordinate.
        assert_eq!(
            dda(&[0, 0, 0], &[0, 1, 2]).collect::<Vec<_>>(),
            vec![vec![0, 0, 0], vec![0, 0, 1], vec![0, 1, 2]]
        );
    }

    #[test]
    fn rasterize_dispatches_on_axes() {
        assert_eq!(rasterize(&[0, 0], &[1, 1]).count(), 2);
        assert_eq!(rasterize(&[0, 0, 0, 0], &[0, 0, 0, 4]).count(), 5);
    }

    #[test]
    fn huge_lines_walk_lazily() {
        let mut planar = rasterize(&[0, 0], &[0, usize::MAX - 1]);
        assert_eq!(planar.next(), Some(vec![0, 0]));
        assert_eq!(planar.next(), Some(vec![0, 1]));

        let mut linear = rasterize(&[0, 0, 0], &[0, 0, usize::MAX - 1]);
        assert_eq!(linear.next(), Some(vec![0, 0, 0]));
        assert_eq!(linear.next(), Some(vec![0, 0, 1]));
    }
}
