//! Clifford gates, described by their action on Pauli strings under
//! conjugation.
//!
//! See also: <https://en.wikipedia.org/wiki/Clifford_gates>

use std::fmt;
use rand::Rng;
use crate::error::{ Error, PMResult };

/// Description of a single gate acting on a register of qubits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Hadamard
    H(usize),
    /// π/2 rotation about Z, acting as *S*<sup>†</sup> *P* *S*.
    ///
    /// Maps X → -Y and Y → X.
    S(usize),
    /// -π/2 rotation about Z; the inverse of `S`.
    Sdg(usize),
    /// π rotation about X
    X(usize),
    /// π rotation about Y
    Y(usize),
    /// π rotation about Z
    Z(usize),
    /// Z-controlled π rotation about Z.
    CZ(usize, usize),
    /// Z-controlled π rotation about X.
    ///
    /// The first qubit index is the control.
    CX(usize, usize),
    /// Swap
    Swap(usize, usize),
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::H(k) => write!(f, "H({})", k),
            Self::S(k) => write!(f, "S({})", k),
            Self::Sdg(k) => write!(f, "S*({})", k),
            Self::X(k) => write!(f, "X({})", k),
            Self::Y(k) => write!(f, "Y({})", k),
            Self::Z(k) => write!(f, "Z({})", k),
            Self::CZ(a, b) => write!(f, "CZ({}, {})", a, b),
            Self::CX(a, b) => write!(f, "CX({}, {})", a, b),
            Self::Swap(a, b) => write!(f, "Swap({}, {})", a, b),
        }
    }
}

impl Gate {
    /// Return `true` if `self` is `H`.
    pub fn is_h(&self) -> bool { matches!(self, Self::H(..)) }

    /// Return `true` if `self` is `S` or `Sdg`.
    pub fn is_s(&self) -> bool { matches!(self, Self::S(..) | Self::Sdg(..)) }

    /// Return `true` if `self` acts on two qubits.
    pub fn is_two_qubit(&self) -> bool {
        matches!(self, Self::CZ(..) | Self::CX(..) | Self::Swap(..))
    }

    /// Return the qubit indices `self` acts on, the second being `None` for
    /// single-qubit gates.
    pub fn qubits(&self) -> (usize, Option<usize>) {
        match *self {
            Self::H(k)
            | Self::S(k)
            | Self::Sdg(k)
            | Self::X(k)
            | Self::Y(k)
            | Self::Z(k)
            => (k, None),
            Self::CZ(a, b)
            | Self::CX(a, b)
            | Self::Swap(a, b)
            => (a, Some(b)),
        }
    }

    /// Check that a single-qubit gate acts within a string of `n` qubits and
    /// that two-qubit gate indices are non-equal.
    ///
    /// Two-qubit gates are allowed past `n` since they extend the string they
    /// act on.
    pub fn validate(&self, n: usize) -> PMResult<()> {
        match self.qubits() {
            (k, None) if k >= n => Err(Error::QubitOutOfRange { qubit: k, len: n }),
            (a, Some(b)) if a == b => Err(Error::RepeatedQubit { qubit: a }),
            _ => Ok(()),
        }
    }

    /// Sample a random single-qubit gate (`H`, `S`, `Sdg`, `X`, `Y`, or `Z`)
    /// for a given qubit index.
    pub fn sample_single<R>(idx: usize, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        match rng.gen_range(0..6_usize) {
            0 => Self::H(idx),
            1 => Self::S(idx),
            2 => Self::Sdg(idx),
            3 => Self::X(idx),
            4 => Self::Y(idx),
            5 => Self::Z(idx),
            _ => unreachable!(),
        }
    }

    /// Sample a random two-qubit gate (`CZ`, `CX`, or `Swap`) on a distinct
    /// pair of qubits below `n`.
    ///
    /// *Panics if `n < 2`.*
    pub fn sample_double<R>(n: usize, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        if n < 2 { panic!("Gate::sample_double: need at least two qubits"); }
        let a = rng.gen_range(0..n);
        let b = (a + rng.gen_range(1..n)) % n;
        match rng.gen_range(0..3_usize) {
            0 => Self::CZ(a, b),
            1 => Self::CX(a, b),
            2 => Self::Swap(a, b),
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod test {
    use rand::{ rngs::StdRng, SeedableRng };
    use super::*;

    #[test]
    fn validation() {
        assert_eq!(Gate::H(1).validate(2), Ok(()));
        assert_eq!(
            Gate::S(2).validate(2),
            Err(Error::QubitOutOfRange { qubit: 2, len: 2 }),
        );
        assert_eq!(Gate::CZ(0, 5).validate(2), Ok(()));
        assert_eq!(Gate::CX(3, 3).validate(8), Err(Error::RepeatedQubit { qubit: 3 }));
    }

    #[test]
    fn kinds() {
        assert!(Gate::H(0).is_h());
        assert!(!Gate::H(0).is_s());
        assert!(Gate::S(1).is_s() && Gate::Sdg(1).is_s());
        assert!(!Gate::CZ(0, 1).is_h());
        assert!(!Gate::Z(2).is_s());
    }

    #[test]
    fn sampled_pairs_are_distinct() {
        let mut rng = StdRng::seed_from_u64(10546);
        for _ in 0..200 {
            let g = Gate::sample_double(3, &mut rng);
            let (a, b) = g.qubits();
            assert!(g.is_two_qubit());
            assert_ne!(Some(a), b);
            assert!(a < 3 && b.unwrap() < 3);
        }
    }
}
