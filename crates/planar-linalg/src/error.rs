/// Error type for the matrix algebra and decomposition routines.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// The matrix determinant is exactly zero.
    #[error("Cannot calculate the inverse of the matrix since it is singular")]
    SingularMatrix,

    /// Row or column index outside of `0..3`.
    #[error("Invalid row or column index {0}, expected a value in 0..3")]
    InvalidIndex(usize),

    /// The decomposition needs at least as many rows as columns.
    #[error("Number of rows ({rows}) must be greater or equal to number of columns ({cols})")]
    InvalidDimension {
        /// Number of rows of the input.
        rows: usize,
        /// Number of columns of the input.
        cols: usize,
    },

    /// A singular value did not converge within the iteration cap.
    #[error("No convergence for singular value {index} in {iterations} iterations")]
    NoConvergence {
        /// Position of the singular value that failed to converge.
        index: usize,
        /// Number of QR sweeps performed before giving up.
        iterations: usize,
    },
}
