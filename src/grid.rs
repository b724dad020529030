//! Projection of flat text onto row-major grids.
//!
//! A [`Shape`] lists the extent of every axis, outermost first, so a planar
//! shape is `[height, width]` and a volumetric one `[pages, rows, cols]`.
//! Cells past the end of the text hold `None`; padding never equals a real
//! character.

/// Grid coordinate, one entry per axis.
pub type Point = Vec<usize>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shape {
    extents: Vec<usize>,
}

impl Shape {
    pub fn new(extents: Vec<usize>) -> Self {
        Self { extents }
    }

    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    pub fn dims(&self) -> usize {
        self.extents.len()
    }

    /// Number of cells, padding included.
    pub fn volume(&self) -> usize {
        self.extents.iter().product()
    }

    /// Row-major flat index of an in-bounds point.
    pub fn flat_index(&self, point: &[usize]) -> usize {
        point
            .iter()
            .zip(&self.extents)
            .fold(0, |acc, (&c, &extent)| acc * extent + c)
    }

    /// Like [`Shape::flat_index`] but returns `None` instead of overflowing.
    /// The outermost extent is never consulted.
    pub fn checked_flat_index(&self, point: &[usize]) -> Option<usize> {
        point
            .iter()
            .zip(&self.extents)
            .try_fold(0usize, |acc, (&c, &extent)| {
                acc.checked_mul(extent)?.checked_add(c)
            })
    }

    /// Inverse of [`Shape::flat_index`].
    pub fn point_at(&self, mut index: usize) -> Point {
        let mut point = vec![0; self.extents.len()];
        for (axis, &extent) in self.extents.iter().enumerate().rev() {
            if axis == 0 || extent == 0 {
                point[axis] = index;
                index = 0;
            } else {
                point[axis] = index % extent;
                index /= extent;
            }
        }
        point
    }

    /// Convert a signed coordinate to a point if it lies inside the shape.
    pub fn bounded(&self, coord: &[isize]) -> Option<Point> {
        coord
            .iter()
            .zip(&self.extents)
            .map(|(&c, &extent)| {
                let c = usize::try_from(c).ok()?;
                (c < extent).then_some(c)
            })
            .collect()
    }
}

/// Read-only view of text laid out over a [`Shape`].
#[derive(Debug, Clone)]
pub struct Grid {
    shape: Shape,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Lay `text` out over `shape`, padding the tail with empty cells.
    /// Text beyond the shape's volume is ignored.
    pub fn project(text: &[char], shape: Shape) -> Self {
        let volume = shape.volume();
        let cells = text
            .iter()
            .copied()
            .map(Some)
            .chain(std::iter::repeat(None))
            .take(volume)
            .collect();
        Self { shape, cells }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn get(&self, point: &[usize]) -> Option<char> {
        self.cells
            .get(self.shape.flat_index(point))
            .copied()
            .flatten()
    }

    /// Every point holding `character`, in row-major order.
    pub fn occurrences(&self, character: char) -> Vec<Point> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Some(character))
            .map(|(index, _)| self.shape.point_at(index))
            .collect()
    }
}
