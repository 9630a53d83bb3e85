//! Single-qubit Pauli operators and their product table.

use std::fmt;
use nalgebra as na;
use num_complex::Complex64 as C64;
use once_cell::sync::Lazy;
use rand::Rng;
use crate::phase::Phase;

/// A single-qubit Pauli operator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pauli {
    /// Identity
    #[default]
    I,
    /// σ<sub>*x*</sub>
    X,
    /// σ<sub>*y*</sub>
    Y,
    /// σ<sub>*z*</sub>
    Z,
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::I => write!(f, "{}", if f.alternate() { "." } else { "I" }),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl TryFrom<char> for Pauli {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'I' => Ok(Self::I),
            'X' => Ok(Self::X),
            'Y' => Ok(Self::Y),
            'Z' => Ok(Self::Z),
            _ => Err(c),
        }
    }
}

/// Multiply two Pauli operators, returning the phase and operator of
/// `p1 · p2`.
///
/// Equal operators square to the identity, the identity is neutral, and the
/// non-trivial operators multiply cyclically: *XY* = *iZ*, *YZ* = *iX*,
/// *ZX* = *iY*, with the reversed orderings picking up -*i*.
pub fn product(p1: Pauli, p2: Pauli) -> (Phase, Pauli) {
    use Pauli::*;
    match (p1, p2) {
        (I, I) => (Phase::Pi0,  I),
        (I, X) => (Phase::Pi0,  X),
        (I, Y) => (Phase::Pi0,  Y),
        (I, Z) => (Phase::Pi0,  Z),
        (X, I) => (Phase::Pi0,  X),
        (X, X) => (Phase::Pi0,  I),
        (X, Y) => (Phase::Pi1h, Z),
        (X, Z) => (Phase::Pi3h, Y),
        (Y, I) => (Phase::Pi0,  Y),
        (Y, X) => (Phase::Pi3h, Z),
        (Y, Y) => (Phase::Pi0,  I),
        (Y, Z) => (Phase::Pi1h, X),
        (Z, I) => (Phase::Pi0,  Z),
        (Z, X) => (Phase::Pi1h, Y),
        (Z, Y) => (Phase::Pi3h, X),
        (Z, Z) => (Phase::Pi0,  I),
    }
}

impl Pauli {
    /// Same as [`product`], with `self` on the left.
    pub fn mul_with_phase(self, rhs: Self) -> (Phase, Self) { product(self, rhs) }

    /// Return `true` if `self` and `other` commute.
    pub fn commutes_with(self, other: Self) -> bool {
        self.is_identity() || other.is_identity() || self == other
    }

    /// Return `true` if `self` is the identity.
    pub fn is_identity(self) -> bool { self == Self::I }

    /// Convert from an integer modulo 4, in the order I, X, Y, Z.
    pub fn from_int(u: usize) -> Self {
        match u % 4 {
            0 => Self::I,
            1 => Self::X,
            2 => Self::Y,
            3 => Self::Z,
            _ => unreachable!(),
        }
    }

    /// Sample a uniformly random Pauli, including the identity.
    pub fn gen<R>(rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        Self::from_int(rng.gen_range(0..4))
    }

    pub(crate) fn gen_many<R>(n: usize, rng: &mut R) -> Vec<Self>
    where R: Rng + ?Sized
    {
        (0..n).map(|_| Self::gen(rng)).collect()
    }

    /// Return the 2 × 2 matrix of `self` in the *z*-basis.
    pub fn as_matrix(self) -> &'static na::DMatrix<C64> {
        match self {
            Self::I => Lazy::force(&PAULI_I),
            Self::X => Lazy::force(&PAULI_X),
            Self::Y => Lazy::force(&PAULI_Y),
            Self::Z => Lazy::force(&PAULI_Z),
        }
    }
}

const ZERO: C64 = C64 { re: 0.0, im: 0.0 };
const ONE: C64 = C64 { re: 1.0, im: 0.0 };
const IM: C64 = C64 { re: 0.0, im: 1.0 };

/// 2 × 2 identity.
pub static PAULI_I: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| na::DMatrix::from_row_slice(2, 2, &[ONE, ZERO, ZERO, ONE]));

/// σ<sub>*x*</sub> in the *z*-basis.
pub static PAULI_X: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| na::DMatrix::from_row_slice(2, 2, &[ZERO, ONE, ONE, ZERO]));

/// σ<sub>*y*</sub> in the *z*-basis.
pub static PAULI_Y: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| na::DMatrix::from_row_slice(2, 2, &[ZERO, -IM, IM, ZERO]));

/// σ<sub>*z*</sub> in the *z*-basis.
pub static PAULI_Z: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| na::DMatrix::from_row_slice(2, 2, &[ONE, ZERO, ZERO, -ONE]));
