use thiserror::Error;

/// Top-level error type for the Bezel curve model.
#[derive(Debug, Error)]
pub enum BezelError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to curve sampling.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("sample count must be at least 1")]
    ZeroSampleCount,
}

/// Errors related to the editing session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid session config: {0}")]
    InvalidConfig(String),

    #[error("session lock poisoned")]
    Poisoned,
}

/// Convenience type alias for results using [`BezelError`].
pub type Result<T> = std::result::Result<T, BezelError>;
