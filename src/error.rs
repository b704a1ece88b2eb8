use thiserror::Error;

/// Error types for the lloyd-kmeans library
#[derive(Error, Debug)]
pub enum KMeansError {
    /// Not enough data points for the requested number of clusters
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Buffer or vector length does not match the model's dimensions
    #[error("Dimension mismatch: {0}")]
    InvalidDimensions(String),

    /// Cluster index is outside `[0, k)`
    #[error("Invalid cluster index: {0}")]
    InvalidCluster(String),
}
