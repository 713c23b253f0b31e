use crate::partitioning::DecompositionVersion;

/// Errors raised while building a domain decomposition.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecompositionError {
    /// A slab decomposition needs at least two boundaries to define one sub-domain.
    #[error("at least two boundaries are needed to define a sub-domain")]
    TooFewBoundaries,
    /// The decomposition axis is not 0, 1, or 2.
    #[error("invalid decomposition axis {0}")]
    InvalidAxis(usize),
    /// Two grid slabs partition the same axis.
    #[error("the axis {0} is partitioned more than once")]
    DuplicateAxis(usize),
    /// The boundary at `index` is not strictly greater than the one preceding it.
    #[error("the boundary {index} is not strictly greater than its predecessor")]
    NonIncreasingBoundaries {
        /// Index of the offending boundary.
        index: usize,
    },
    /// The boundary at `index` is NaN.
    #[error("the boundary {index} is NaN")]
    NanBoundary {
        /// Index of the offending boundary.
        index: usize,
    },
    /// A grid decomposition was built without any slab.
    #[error("a grid decomposition needs at least one partitioned axis")]
    EmptyGrid,
}

/// Errors raised while classifying a body against a domain decomposition.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClassificationError {
    /// The collision model has no shape, hence no bounding box.
    #[error("the collision model has no bounding box: no shape was added to it")]
    EmptyModel,
    /// The classification was computed against another version of the decomposition.
    #[error("classification computed against decomposition {found:?}, expected {expected:?}")]
    VersionMismatch {
        /// The version of the decomposition in use.
        expected: DecompositionVersion,
        /// The version the classification was computed against.
        found: DecompositionVersion,
    },
}
