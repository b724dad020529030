use crate::TessellationError;

/// Widths tried on top of the divisors of the input length, to catch
/// near-periodic text whose length does not factor nicely.
pub const COMMON_WIDTHS: [usize; 10] = [8, 10, 12, 16, 20, 30, 40, 50, 60, 80];

/// Maximum number of volumetric shapes scanned per run.
pub const MAX_SHAPES: usize = 50;

/// Largest declared length [`crate::decompress`] accepts. Every painted cell
/// and every line step is bounded by the declared length, so this caps the
/// work a single blueprint can ask for.
pub const DEFAULT_DECODE_LIMIT: usize = 1 << 24;

/// Number of axes a projection has. Always at least two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dimensionality(usize);

impl Dimensionality {
    /// Width x height matrices.
    pub const PLANAR: Self = Self(2);
    /// Pages x rows x cols volumes.
    pub const VOLUMETRIC: Self = Self(3);

    pub fn new(axes: usize) -> Result<Self, TessellationError> {
        if axes < 2 {
            return Err(TessellationError::Config(format!(
                "dimensionality must be at least 2, got {axes}"
            )));
        }
        Ok(Self(axes))
    }

    pub fn axes(self) -> usize {
        self.0
    }

    pub fn is_planar(self) -> bool {
        self.0 == 2
    }
}

impl Default for Dimensionality {
    fn default() -> Self {
        Self::PLANAR
    }
}

/// Runtime configuration for the tessellation engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Axes of every projection scanned.
    pub dimensionality: Dimensionality,
    /// Extra planar widths scanned besides the divisors of the length.
    pub common_widths: Vec<usize>,
    /// Cap on volumetric shapes (ignored for planar projections).
    pub max_shapes: usize,
    /// Scan the shapes of each character on the rayon pool.
    pub parallel: bool,
}

impl EngineConfig {
    pub fn planar() -> Self {
        Self::default()
    }

    pub fn volumetric() -> Self {
        Self {
            dimensionality: Dimensionality::VOLUMETRIC,
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dimensionality: Dimensionality::PLANAR,
            common_widths: COMMON_WIDTHS.to_vec(),
            max_shapes: MAX_SHAPES,
            parallel: true,
        }
    }
}
