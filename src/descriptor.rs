//! Textual line descriptors.
//!
//! Planar: `(character,width,y1,x1,y2,x2)`.
//! Volumetric: `(character,pages,rows,cols,z1,y1,x1,z2,y2,x2)`, and the same
//! pattern with more extents and coordinates for higher dimensionalities.

use crate::blueprint::{DESCRIPTOR_SEPARATOR, LENGTH_DELIMITER, REMNANT_DELIMITER};
use crate::error::{BlueprintError, DescriptorFault};
use crate::grid::{Point, Shape};
use std::fmt;

/// Characters that can never be the subject of a line.
pub const RESERVED: [char; 6] = [
    '(',
    ')',
    ',',
    LENGTH_DELIMITER,
    DESCRIPTOR_SEPARATOR,
    REMNANT_DELIMITER,
];

pub fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

/// A straight run of one character between two canonical endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDescriptor {
    pub character: char,
    pub shape: Shape,
    /// Lexicographically smallest covered point.
    pub start: Point,
    /// Lexicographically largest covered point.
    pub end: Point,
}

impl LineDescriptor {
    pub fn dims(&self) -> usize {
        self.shape.dims()
    }

    /// Number of grid cells the rasterizer visits for this line.
    pub fn point_count(&self) -> usize {
        self.start
            .iter()
            .zip(&self.end)
            .map(|(&a, &b)| a.abs_diff(b))
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }

    /// Serialized length in characters, i.e. the descriptor's cost.
    pub fn cost(&self) -> usize {
        self.to_string().chars().count()
    }

    /// Parse one descriptor, including its parentheses.
    pub fn parse(text: &str) -> Result<Self, BlueprintError> {
        let fail = |fault| BlueprintError::InvalidDescriptor {
            descriptor: text.to_string(),
            fault,
        };
        let inner = text
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .ok_or_else(|| fail(DescriptorFault::Unbracketed))?;
        let fields: Vec<&str> = inner.split(',').collect();

        let mut chars = fields[0].chars();
        let character = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(fail(DescriptorFault::Character(fields[0].to_string()))),
        };

        let numbers = fields[1..]
            .iter()
            .enumerate()
            .map(|(i, f)| {
                f.parse::<usize>().map_err(|_| {
                    fail(DescriptorFault::Field {
                        index: i + 1,
                        value: f.to_string(),
                    })
                })
            })
            .collect::<Result<Vec<usize>, _>>()?;

        let (shape, start, end) = match fields.len() {
            // Planar descriptors only carry the row width; the height is
            // taken as the smallest that holds the line, which leaves the
            // row-major mapping unchanged.
            6 => {
                let start = numbers[1..3].to_vec();
                let end = numbers[3..5].to_vec();
                let height = start[0].max(end[0]).saturating_add(1);
                (Shape::new(vec![height, numbers[0]]), start, end)
            }
            n if n >= 10 && (n - 1) % 3 == 0 => {
                let dims = (n - 1) / 3;
                let extents = numbers[..dims].to_vec();
                if extents
                    .iter()
                    .try_fold(1usize, |acc, &e| acc.checked_mul(e))
                    .is_none()
                {
                    return Err(fail(DescriptorFault::Overflow));
                }
                (
                    Shape::new(extents),
                    numbers[dims..2 * dims].to_vec(),
                    numbers[2 * dims..].to_vec(),
                )
            }
            n => return Err(fail(DescriptorFault::FieldCount(n))),
        };

        Ok(Self {
            character,
            shape,
            start,
            end,
        })
    }
}

impl fmt::Display for LineDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.character)?;
        if self.shape.dims() == 2 {
            write!(f, ",{}", self.shape.extents()[1])?;
        } else {
            for extent in self.shape.extents() {
                write!(f, ",{extent}")?;
            }
        }
        for c in self.start.iter().chain(&self.end) {
            write!(f, ",{c}")?;
        }
        write!(f, ")")
    }
}
