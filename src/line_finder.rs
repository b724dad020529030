//! Exhaustive discovery of straight runs of one character in one grid.
//!
//! Every pair of occurrences defines a step vector; the run through the pair
//! is extended both ways until it leaves the grid or meets another
//! character. Only steps whose components are all in `{-1, 0, 1}` are
//! followed: the rasterizer redraws every cell between two endpoints, so a
//! sparser run could not be replayed without overwriting its gaps.
//!
//! The same run is found once per adjacent pair on it. Duplicates are
//! removed by the candidate store, not here.

use crate::candidate::LineCandidate;
use crate::grid::{Grid, Point};

/// Every maximal run of more than two `character` cells, points sorted.
pub fn trace_lines(grid: &Grid, character: char) -> Vec<Vec<Point>> {
    let occurrences = grid.occurrences(character);
    if occurrences.len() < 2 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for (i, p1) in occurrences.iter().enumerate() {
        for p2 in &occurrences[i + 1..] {
            let step: Vec<isize> = p1
                .iter()
                .zip(p2)
                .map(|(&a, &b)| b as isize - a as isize)
                .collect();
            if step.iter().any(|d| d.abs() > 1) {
                continue;
            }

            let mut points = vec![p1.clone(), p2.clone()];
            extend(grid, character, p2, &step, 1, &mut points);
            extend(grid, character, p1, &step, -1, &mut points);

            if points.len() > 2 {
                points.sort();
                points.dedup();
                lines.push(points);
            }
        }
    }
    lines
}

/// Lines worth encoding: traced runs whose descriptor is shorter than the
/// run itself.
pub fn find_lines(grid: &Grid, character: char) -> Vec<LineCandidate> {
    trace_lines(grid, character)
        .into_iter()
        .map(|points| LineCandidate::new(character, grid.shape().clone(), points))
        .filter(|c| c.savings > 0)
        .collect()
}

fn extend(
    grid: &Grid,
    character: char,
    from: &[usize],
    step: &[isize],
    sign: isize,
    points: &mut Vec<Point>,
) {
    let mut cur: Vec<isize> = from.iter().map(|&c| c as isize).collect();
    loop {
        for (c, d) in cur.iter_mut().zip(step) {
            *c += sign * d;
        }
        match grid.shape().bounded(&cur) {
            Some(point) if grid.get(&point) == Some(character) => points.push(point),
            _ => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Shape;

    fn grid(text: &str, extents: Vec<usize>) -> Grid {
        let chars: Vec<char> = text.chars().collect();
        Grid::project(&chars, Shape::new(extents))
    }

    #[test]
    fn no_lines_for_sparse_character() {
        let g = grid("abcdefgh", vec![2, 4]);
        assert!(trace_lines(&g, 'a').is_empty());
        assert!(trace_lines(&g, 'z').is_empty());
    }

    #[test]
    fn traces_vertical_and_diagonal() {
        // a . . .
        // b a . .
        // b . a .
        // b . . a
        let g = grid("a...ba..b.a.b..a", vec![4, 4]);
        let a = trace_lines(&g, 'a');
        assert!(a.contains(&vec![vec![0, 0], vec![1, 1], vec![2, 2], vec![3, 3]]));
        let b = trace_lines(&g, 'b');
        assert!(b.contains(&vec![vec![1, 0], vec![2, 0], vec![3, 0]]));
    }

    #[test]
    fn runs_stop_at_other_characters() {
        let g = grid("aaaxaaaa", vec![1, 8]);
        let lines = trace_lines(&g, 'a');
        assert!(lines.contains(&vec![vec![0, 0], vec![0, 1], vec![0, 2]]));
        assert!(lines.contains(&vec![vec![0, 4], vec![0, 5], vec![0, 6], vec![0, 7]]));
        assert!(lines.iter().all(|l| !l.contains(&vec![0, 3])));
    }

    #[test]
    fn sparse_runs_are_not_followed() {
        let g = grid("a.a.a.a.a.a.a.a.a.a.a.a.a.a.a.a.", vec![1, 32]);
        assert!(trace_lines(&g, 'a').is_empty());
    }

    #[test]
    fn padding_breaks_runs() {
        // Width 5 over 7 characters: second row is "aa" plus padding.
        let g = grid("aaaaaaa", vec![2, 5]);
        let lines = trace_lines(&g, 'a');
        assert!(lines.iter().all(|l| l.iter().all(|p| g.get(p) == Some('a'))));
    }

    #[test]
    fn savings_filter() {
        let long = "q".repeat(20);
        let g = grid(&long, vec![1, 20]);
        let found = find_lines(&g, 'q');
        assert!(!found.is_empty());
        assert!(found.iter().all(|c| c.savings > 0));
        assert_eq!(found[0].descriptor.to_string(), "(q,20,0,0,0,19)");
        assert_eq!(found[0].savings, 20 - 15);
    }
}
