//! Errors raised by strict parsing and strict gate application.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("malformed Pauli string {input:?}: unexpected {found:?} at byte {position}")]
    MalformedPauli { input: String, position: usize, found: char },

    #[error("malformed Majorana string {input:?}: unexpected {found:?} at byte {position}")]
    MalformedMajorana { input: String, position: usize, found: char },

    #[error("Majorana index {input:?} does not fit in a machine word")]
    IndexOverflow { input: String },

    #[error("Majorana index {index} exceeds the maximum of {max}")]
    IndexTooLarge { index: usize, max: usize },

    #[error("qubit index {qubit} out of range for a string of length {len}")]
    QubitOutOfRange { qubit: usize, len: usize },

    #[error("two-qubit gate applied twice to qubit {qubit}")]
    RepeatedQubit { qubit: usize },

    #[error("malformed expression {input:?}: {reason}")]
    MalformedExpr { input: String, reason: String },
}

pub type PMResult<T> = Result<T, Error>;

/// How parsers and gate applications treat malformed input.
///
/// `Lenient` skips unrecognized characters and ignores out-of-range qubit
/// indices, logging a warning for each; `Strict` turns them into an
/// [`Error`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strictness {
    Strict,
    #[default]
    Lenient,
}

impl Strictness {
    /// Return `true` if `self` is `Strict`.
    pub fn is_strict(&self) -> bool { matches!(self, Self::Strict) }
}
