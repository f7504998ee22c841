//! Error types for path mutation.

use thiserror::Error;

use crate::tree::TreeKind;

/// A value was asked to behave as a container kind it is not.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected {expected}, found {found}")]
pub struct KindMismatch {
    pub expected: TreeKind,
    pub found: TreeKind,
}

/// Failure to produce a lossless structural copy of a tree.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CloneError {
    /// NaN and the infinities have no textual tree form.
    #[error("non-finite number {0} cannot be copied")]
    NonFiniteNumber(f64),
    #[error("tree nesting exceeds {max} levels")]
    TooDeep { max: usize },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MutateError {
    /// The walk needed to descend into (or index) a value of the wrong kind.
    #[error("type mismatch at `{segment}`: expected {expected}, found {found}")]
    TypeMismatch {
        segment: String,
        expected: TreeKind,
        found: TreeKind,
    },
    #[error("index {index} at `{segment}` exceeds the maximum of {max}")]
    IndexTooLarge {
        segment: String,
        index: usize,
        max: usize,
    },
    /// The sequence could not be padded with holes up to the index.
    #[error("cannot grow sequence at `{segment}` to index {index}")]
    CapacityOverflow { segment: String, index: usize },
    #[error(transparent)]
    Clone(#[from] CloneError),
}

impl MutateError {
    pub(crate) fn mismatch(segment: impl ToString, err: KindMismatch) -> Self {
        MutateError::TypeMismatch {
            segment: segment.to_string(),
            expected: err.expected,
            found: err.found,
        }
    }
}
