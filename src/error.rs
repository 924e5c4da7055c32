use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("Input out of range: {0}")]
    OutOfRange(String),

    #[error("GCJ02 inverse did not converge after {iterations} iterations at ({lon}, {lat})")]
    Convergence { iterations: usize, lon: f64, lat: f64 },

    #[error("Unknown coordinate system: {0}")]
    UnknownSystem(String),
}
