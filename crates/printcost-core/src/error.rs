//! Error handling for PrintCost
//!
//! Provides error types for every stage of an estimate:
//! - Mesh errors (empty, malformed or degenerate geometry)
//! - Parameter errors (print profile, material and infill validation)
//! - Slicing errors (the optional external slicing collaborator)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Mesh error type
///
/// Represents problems with the triangle soup handed to the estimator.
/// An invalid mesh never produces NaN downstream: the pipeline reports a
/// zero-material estimate instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Mesh contains no triangles
    #[error("Mesh contains no triangles")]
    Empty,

    /// Flat vertex stream cannot be grouped into triangles
    #[error("Vertex count {count} is not a multiple of 3")]
    VertexCountNotMultipleOfThree {
        /// The number of vertices supplied.
        count: usize,
    },

    /// A vertex coordinate is NaN or infinite
    #[error("Non-finite coordinate in triangle {triangle}")]
    NonFiniteVertex {
        /// Index of the offending triangle.
        triangle: usize,
    },

    /// Mesh has triangles but encloses no volume
    #[error("Mesh with {triangles} triangles encloses zero volume")]
    ZeroVolume {
        /// The number of triangles in the mesh.
        triangles: usize,
    },

    /// Mesh bytes could not be decoded
    #[error("Failed to decode mesh: {reason}")]
    Decode {
        /// The reason decoding failed.
        reason: String,
    },
}

/// Parameter error type
///
/// Represents invalid print-profile, material or infill inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Layer height must be positive and finite
    #[error("Invalid layer height: {value} mm")]
    InvalidLayerHeight {
        /// The rejected layer height.
        value: f64,
    },

    /// At least one wall is required
    #[error("Wall count must be at least 1")]
    ZeroWallCount,

    /// Line width must be positive and finite
    #[error("Invalid line width: {value} mm")]
    InvalidLineWidth {
        /// The rejected line width.
        value: f64,
    },

    /// Infill outside [0, 1]
    #[error("Infill fraction {value} outside 0..=1")]
    InfillOutOfRange {
        /// The rejected infill fraction.
        value: f64,
    },

    /// Material density must be positive and finite
    #[error("Invalid density for {material}: {value} g/cm³")]
    InvalidDensity {
        /// The material name.
        material: String,
        /// The rejected density.
        value: f64,
    },

    /// Filament diameter must be positive and finite
    #[error("Invalid filament diameter for {material}: {value} mm")]
    InvalidFilamentDiameter {
        /// The material name.
        material: String,
        /// The rejected diameter.
        value: f64,
    },

    /// Price per kilogram must be non-negative and finite
    #[error("Invalid price for {material}: {value} per kg")]
    InvalidPrice {
        /// The material name.
        material: String,
        /// The rejected price.
        value: f64,
    },

    /// Labor cost must be non-negative and finite
    #[error("Invalid labor cost: {value}")]
    InvalidLaborCost {
        /// The rejected labor cost.
        value: f64,
    },

    /// Material not present in the library
    #[error("Unknown material: {name}")]
    UnknownMaterial {
        /// The requested material name.
        name: String,
    },

    /// Quality tier name not recognised
    #[error("Unknown print profile: {name}")]
    UnknownProfile {
        /// The requested profile name.
        name: String,
    },
}

/// Slicing error type
///
/// Represents failures of the external slicing collaborator. These are
/// always recovered by falling back to the geometric estimate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlicingError {
    /// No slicing backend is configured
    #[error("Slicing backend unavailable")]
    Unavailable,

    /// Slicer did not answer in time
    #[error("Slicing timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// Backend reported a transport or engine failure
    #[error("Slicing backend error: {reason}")]
    Backend {
        /// The reason reported by the backend.
        reason: String,
    },

    /// Metadata present but unusable
    #[error("Malformed slicer metadata: {reason}")]
    MalformedMetadata {
        /// Why the metadata was rejected.
        reason: String,
    },

    /// Neither a weight nor a volume figure was returned
    #[error("Slicer metadata has no filament weight or volume")]
    MissingFields,

    /// Adapter is already slicing another request
    #[error("Slicing adapter is busy")]
    Busy,
}

/// Main error type for PrintCost
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Mesh error
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Parameter error
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Slicing error
    #[error(transparent)]
    Slicing(#[from] SlicingError),

    /// Unexpected failure while computing an estimate
    #[error("Calculation failed: {reason}")]
    Computation {
        /// What went wrong.
        reason: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a computation failure
    pub fn computation(reason: impl Into<String>) -> Self {
        Error::Computation {
            reason: reason.into(),
        }
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Slicing(SlicingError::Timeout { .. }))
    }

    /// Check if this is a mesh error
    pub fn is_mesh_error(&self) -> bool {
        matches!(self, Error::Mesh(_))
    }

    /// Check if this is a parameter error
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Error::Parameter(_))
    }

    /// Check if this is a slicing error
    pub fn is_slicing_error(&self) -> bool {
        matches!(self, Error::Slicing(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
