//! Core logic for the Tessera line-tessellation codec.
//!
//! Text is reshaped into planar or volumetric grids; straight runs of a
//! single character are replaced by short descriptors and everything else
//! is kept verbatim in a remnant stream. The search is exhaustive and
//! offers no compression guarantee.
//!
//! ```
//! let text = "q".repeat(40);
//! let blueprint = tessera::compress(&text);
//! let wire = blueprint.encode();
//! assert_eq!(tessera::decompress(&wire).unwrap(), text);
//! ```

pub mod blueprint;
pub mod candidate;
pub mod compress;
pub mod config;
pub mod decompress;
pub mod descriptor;
pub mod error;
pub mod grid;
pub mod io_utils;
pub mod line_finder;
pub mod progress;
pub mod raster;
pub mod select;
pub mod shape;
pub mod stats;

pub use blueprint::{Blueprint, DESCRIPTOR_SEPARATOR, LENGTH_DELIMITER, REMNANT_DELIMITER};
pub use candidate::{CandidateStore, LineCandidate};
pub use compress::{compress, compress_with, generate_candidates, scan_characters};
pub use config::{Dimensionality, EngineConfig};
pub use decompress::{decompress, decompress_with_limit, reconstruct};
pub use descriptor::{is_reserved, LineDescriptor};
pub use error::{BlueprintError, DescriptorFault, TessellationError};
pub use grid::{Grid, Point, Shape};
pub use line_finder::{find_lines, trace_lines};
pub use progress::{NoProgress, Phase, Progress, ProgressSink};
pub use raster::rasterize;
pub use select::{select_lines, ClaimSet, Selection};
pub use shape::enumerate_shapes;
pub use stats::BlueprintStats;
