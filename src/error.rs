use thiserror::Error;

/// Why a single line descriptor failed to parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorFault {
    #[error("not enclosed in parentheses")]
    Unbracketed,
    /// Field count matches neither the planar nor a volumetric layout.
    #[error("unexpected field count {0}")]
    FieldCount(usize),
    /// The character field is not exactly one character.
    #[error("invalid character field {0:?}")]
    Character(String),
    #[error("field {index} is not a non-negative integer: {value:?}")]
    Field { index: usize, value: String },
    /// Extents multiply past `usize::MAX`.
    #[error("shape overflows")]
    Overflow,
    /// The line visits more cells than the blueprint holds.
    #[error("line covers {points} cells but the blueprint holds {capacity}")]
    Oversized { points: usize, capacity: usize },
    /// An endpoint lies outside the descriptor's own shape.
    #[error("endpoint {point:?} lies outside extents {extents:?}")]
    OutOfShape {
        point: Vec<usize>,
        extents: Vec<usize>,
    },
}

/// Errors raised while decoding the blueprint wire format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlueprintError {
    #[error("missing {0:?} delimiter")]
    MissingDelimiter(char),
    #[error("invalid length field {0:?}")]
    InvalidLength(String),
    #[error("descriptor {descriptor:?}: {fault}")]
    InvalidDescriptor {
        descriptor: String,
        fault: DescriptorFault,
    },
}

#[derive(Error, Debug)]
pub enum TessellationError {
    /// Blueprint text could not be parsed.
    #[error("malformed blueprint: {0}")]
    MalformedBlueprint(#[from] BlueprintError),

    /// Declared length is larger than the caller allows.
    #[error("blueprint declares {length} characters, limit is {limit}")]
    LimitExceeded { length: usize, limit: usize },

    /// Caller-level refusal of empty input.
    #[error("input is empty")]
    EmptyInput,

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
