//! Global phases of Pauli and Majorana strings.
//!
//! Both string types carry an overall factor drawn from {1, *i*, -1, -*i*},
//! which is stored as the exponent *k* in *i*<sup>*k*</sup>. All arithmetic
//! is performed modulo 4, so a [`Phase`] is always reduced.

use std::{
    fmt,
    ops::{
        Neg,
        Add,
        AddAssign,
        Sub,
        SubAssign,
        Mul,
        MulAssign,
    },
};
use num_complex::Complex64 as C64;
use rand::Rng;

/// The argument of a complex phase factor, limited to integer multiples of
/// π/2.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// 0
    #[default]
    Pi0,
    /// π/2
    Pi1h,
    /// π
    Pi,
    /// 3π/2
    Pi3h,
}

/// Prints the text prefix shared by Pauli and Majorana strings: nothing for
/// +1, then `+i`, `-`, `-i`.
impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Pi0 => Ok(()),
            Self::Pi1h => write!(f, "+i"),
            Self::Pi => write!(f, "-"),
            Self::Pi3h => write!(f, "-i"),
        }
    }
}

impl Phase {
    /// Convert to the bare exponent on *i*.
    pub fn to_int(&self) -> i8 {
        match self {
            Self::Pi0  => 0,
            Self::Pi1h => 1,
            Self::Pi   => 2,
            Self::Pi3h => 3,
        }
    }

    /// Convert from a bare exponent on *i* (modulo 4).
    pub fn from_int(i: i8) -> Self {
        match i.rem_euclid(4) {
            0 => Self::Pi0,
            1 => Self::Pi1h,
            2 => Self::Pi,
            3 => Self::Pi3h,
            _ => unreachable!(),
        }
    }

    /// Return `true` if `self` is a real sign, ±1.
    pub fn is_real(&self) -> bool { matches!(self, Self::Pi0 | Self::Pi) }

    pub fn as_complex(self) -> C64 {
        match self {
            Self::Pi0  => 1.0_f64.into(),
            Self::Pi1h => C64::i(),
            Self::Pi   => (-1.0_f64).into(),
            Self::Pi3h => -C64::i(),
        }
    }

    /// Sample a uniformly random phase.
    pub fn gen<R>(rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        Self::from_int(rng.gen_range(0..4_i8))
    }

    /// Split an optional phase prefix off the front of `s`.
    ///
    /// Recognized prefixes are `+` (1), `+i` or `i` (*i*), `-` (-1), and `-i`
    /// (-*i*). Two-character prefixes are tried before one-character ones;
    /// with no prefix the phase is 1 and `s` is returned whole.
    pub fn split_prefix(s: &str) -> (Self, &str) {
        const LONG: [(&str, Phase); 2] = [("+i", Phase::Pi1h), ("-i", Phase::Pi3h)];
        const SHORT: [(&str, Phase); 3]
            = [("+", Phase::Pi0), ("i", Phase::Pi1h), ("-", Phase::Pi)];
        LONG.iter().chain(SHORT.iter())
            .find_map(|(pre, ph)| s.strip_prefix(pre).map(|rest| (*ph, rest)))
            .unwrap_or((Self::Pi0, s))
    }
}

impl Neg for Phase {
    type Output = Self;

    fn neg(self) -> Self::Output { Self::from_int(-self.to_int()) }
}

macro_rules! impl_phase_math {
    (
        $trait:ident,
        $trait_fn:ident,
        $trait_assign:ident,
        $trait_assign_fn:ident,
        $op:tt
    ) => {
        impl $trait for Phase {
            type Output = Self;

            fn $trait_fn(self, rhs: Self) -> Self::Output {
                Self::from_int(self.to_int() $op rhs.to_int())
            }
        }

        impl $trait_assign for Phase {
            fn $trait_assign_fn(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    }
}
impl_phase_math!(Add, add, AddAssign, add_assign, +);
impl_phase_math!(Sub, sub, SubAssign, sub_assign, -);

// multiplication of the phase factors themselves, i.e. adding exponents, is
// `Add`; `Mul<i8>` raises to a power
impl Mul<i8> for Phase {
    type Output = Self;

    fn mul(self, i: i8) -> Self::Output {
        Self::from_int((self.to_int() * i.rem_euclid(4)).rem_euclid(4))
    }
}

impl MulAssign<i8> for Phase {
    fn mul_assign(&mut self, i: i8) { *self = *self * i; }
}

impl Mul<Phase> for i8 {
    type Output = Phase;

    fn mul(self, ph: Phase) -> Self::Output { ph * self }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prefixes() {
        assert_eq!(Phase::split_prefix("XY"), (Phase::Pi0, "XY"));
        assert_eq!(Phase::split_prefix("+XY"), (Phase::Pi0, "XY"));
        assert_eq!(Phase::split_prefix("+iXY"), (Phase::Pi1h, "XY"));
        assert_eq!(Phase::split_prefix("iXY"), (Phase::Pi1h, "XY"));
        assert_eq!(Phase::split_prefix("-XY"), (Phase::Pi, "XY"));
        assert_eq!(Phase::split_prefix("-iXY"), (Phase::Pi3h, "XY"));
        assert_eq!(Phase::split_prefix("-ic1 c3"), (Phase::Pi3h, "c1 c3"));
        assert_eq!(Phase::split_prefix(""), (Phase::Pi0, ""));
    }

    #[test]
    fn display_round_trip() {
        for k in 0..4 {
            let ph = Phase::from_int(k);
            let text = format!("{}Z", ph);
            assert_eq!(Phase::split_prefix(&text), (ph, "Z"));
        }
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Phase::Pi1h + Phase::Pi3h, Phase::Pi0);
        assert_eq!(Phase::Pi + Phase::Pi3h, Phase::Pi1h);
        assert_eq!(Phase::Pi0 - Phase::Pi1h, Phase::Pi3h);
        assert_eq!(-Phase::Pi1h, Phase::Pi3h);
        assert_eq!(Phase::Pi1h * 3, Phase::Pi3h);
        assert_eq!(Phase::Pi1h * -1, Phase::Pi3h);
        assert_eq!(2 * Phase::Pi1h, Phase::Pi);
        assert_eq!(Phase::from_int(-5), Phase::Pi3h);
        let mut ph = Phase::Pi;
        ph += Phase::Pi;
        assert_eq!(ph, Phase::Pi0);
    }

    #[test]
    fn complex_values_agree_with_exponents() {
        for a in 0..4 {
            for b in 0..4 {
                let (pa, pb) = (Phase::from_int(a), Phase::from_int(b));
                let lhs = (pa + pb).as_complex();
                let rhs = pa.as_complex() * pb.as_complex();
                assert!((lhs - rhs).norm() < 1e-12);
            }
        }
    }
}
