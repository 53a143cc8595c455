use thiserror::Error;

/// Identifies one of the two legs extending from the vertex of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleLeg {
    /// The leg from the vertex to the first point.
    First,
    /// The leg from the vertex to the third point.
    Second,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Angle is undefined: {leg:?} leg has zero or non-finite length")]
    DegenerateVector { leg: AngleLeg },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Debug, Error)]
pub enum MoleculeError {
    #[error("Invalid type for '{field}': expected {expected}, found {found}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid molecule name: {0}")]
    InvalidName(String),

    #[error("Invalid element symbol at index {index}: {reason}")]
    InvalidSymbol { index: usize, reason: String },

    #[error("Shape mismatch: {symbols} symbols but {coordinates} coordinate rows")]
    ShapeMismatch { symbols: usize, coordinates: usize },

    #[error("Invalid coordinate row {row}: {reason}")]
    InvalidCoordinateRow { row: usize, reason: String },

    #[error("Atom index {index} is out of range for a molecule with {num_atoms} atoms")]
    AtomIndexOutOfRange { index: usize, num_atoms: usize },

    #[error("No atomic mass is known for element '{0}'")]
    UnknownElement(String),

    #[error("Geometry error: {source}")]
    Geometry {
        #[from]
        source: GeometryError,
    },

    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("TOML parsing error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },
}

impl From<std::convert::Infallible> for MoleculeError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
