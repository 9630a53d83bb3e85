//! Ordered products of Majorana operators with a global phase.
//!
//! Majorana operators *c*<sub>*k*</sub> are Hermitian, square to the identity
//! and pairwise anticommute. A [`MajoranaString`] is a product of them in the
//! order given by its index list; order and repeats are meaningful until the
//! string is [normalized][MajoranaString::normalize], which brings it to the
//! canonical strictly increasing form while tracking the sign.
//!
//! # Example
//! ```
//! use pauli_majorana::{ majorana::MajoranaString, phase::Phase };
//!
//! let mut m: MajoranaString = "c3 c1 c1 c2".parse().unwrap();
//! m.normalize();
//! assert_eq!(m.indices, vec![2, 3]);
//! assert_eq!(m.phase, Phase::Pi);
//! assert_eq!(m.to_string(), "-c2 c3");
//! ```

use std::{ fmt, str::FromStr };
use itertools::Itertools;
use rand::Rng;
use tracing::{ debug, trace, warn };
use crate::{
    error::{ Error, PMResult, Strictness },
    pauli_string::PauliString,
    phase::Phase,
};

/// Default symbol used when printing Majorana operators.
pub const SYMBOL: &str = "c";

/// Largest index accepted by [`MajoranaString::parse`].
///
/// Converting *c*<sub>*k*</sub> to a Pauli string allocates ⌊*k*/2⌋ + 1
/// qubits.
pub const MAX_INDEX: usize = 1 << 20;

/// A product of Majorana operators with a phase.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MajoranaString {
    pub phase: Phase,
    pub indices: Vec<usize>,
}

impl fmt::Display for MajoranaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, SYMBOL)
    }
}

impl FromStr for MajoranaString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Strictness::Strict)
    }
}

impl MajoranaString {
    pub fn new(phase: Phase, indices: Vec<usize>) -> Self { Self { phase, indices } }

    /// Parse a string of the form `<phase><indices>`, where `<phase>` is an
    /// optional prefix understood by [`Phase::split_prefix`] and every
    /// maximal run of decimal digits in `<indices>` is one index.
    ///
    /// Under [`Strictness::Lenient`] every non-digit character separates
    /// indices and indices above [`MAX_INDEX`] are skipped. Under
    /// [`Strictness::Strict`] the only accepted non-digits are whitespace,
    /// `,`, `*`, and ASCII letters immediately preceding an index (a symbol
    /// such as `c` or `γ` is not accepted; use ASCII); anything else is an
    /// error, as is an index above [`MAX_INDEX`].
    pub fn parse(s: &str, strictness: Strictness) -> PMResult<Self> {
        let (phase, body) = Phase::split_prefix(s);
        let offs = s.len() - body.len();
        let strict = strictness.is_strict();
        let malformed = |position: usize, found: char| {
            Error::MalformedMajorana { input: s.to_string(), position, found }
        };

        let mut indices: Vec<usize> = Vec::new();
        // start of an index still to be read, and of a symbol awaiting one
        let mut digits_start: Option<usize> = None;
        let mut symbol: Option<(usize, char)> = None;
        for (k, c) in body.char_indices().chain(std::iter::once((body.len(), ' '))) {
            if c.is_ascii_digit() {
                digits_start.get_or_insert(k);
                symbol = None;
                continue;
            }
            if let Some(start) = digits_start.take() {
                let digits = &body[start..k];
                match digits.parse::<usize>() {
                    Ok(n) if n <= MAX_INDEX => { indices.push(n); },
                    Ok(n) if strict => {
                        return Err(Error::IndexTooLarge { index: n, max: MAX_INDEX });
                    },
                    Err(_) if strict => {
                        return Err(Error::IndexOverflow { input: digits.to_string() });
                    },
                    _ => {
                        warn!(input = s, "skipping oversized Majorana index {}", digits);
                    },
                }
            }
            if !strict { continue; }
            if c.is_ascii_alphabetic() {
                symbol.get_or_insert((offs + k, c));
            } else if c.is_whitespace() || c == ',' || c == '*' {
                if let Some((position, found)) = symbol {
                    return Err(malformed(position, found));
                }
            } else {
                return Err(malformed(offs + k, c));
            }
        }
        Ok(Self { phase, indices })
    }

    /// Parse leniently; see [`Self::parse`].
    pub fn from_text(s: &str) -> Self {
        Self::parse(s, Strictness::Lenient).unwrap_or_default()
    }

    /// Return the number of operators in the product.
    pub fn len(&self) -> usize { self.indices.len() }

    /// Return `true` if the product is empty, i.e. a phase times the
    /// identity.
    pub fn is_empty(&self) -> bool { self.indices.is_empty() }

    /// Return the number of qubits needed to represent `self` as a Pauli
    /// string.
    pub fn num_qubits(&self) -> usize {
        self.indices.iter().max().map(|k| k / 2 + 1).unwrap_or(0)
    }

    /// Return `true` if the indices are strictly increasing.
    pub fn is_normalized(&self) -> bool {
        self.indices.iter().tuple_windows().all(|(a, b)| a < b)
    }

    /// Bring `self` to canonical form in place.
    ///
    /// The indices are bubble-sorted into non-decreasing order, flipping the
    /// sign for every transposition of two unequal operators, after which
    /// equal neighbors are cancelled in pairs (*c*<sub>*k*</sub><sup>2</sup> =
    /// 1). The result is strictly increasing.
    pub fn normalize(&mut self) -> &mut Self {
        let swaps = bubble_sort(&mut self.indices);
        if swaps % 2 == 1 { self.phase += Phase::Pi; }
        let len = self.indices.len();
        self.indices
            = self.indices.iter().copied()
            .dedup_with_count()
            .filter_map(|(count, k)| (count % 2 == 1).then_some(k))
            .collect();
        debug!(
            swaps,
            cancelled = (len - self.indices.len()) / 2,
            "normalized Majorana string"
        );
        self
    }

    /// Return a normalized copy of `self`.
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        out.normalize();
        out
    }

    /// Multiply `self` on the right by `other`, returning a new string.
    ///
    /// The result is the concatenation of both index lists and is not
    /// normalized.
    pub fn combine(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.combine_assign(other);
        out
    }

    /// Multiply `self` on the right by `other` in place.
    pub fn combine_assign(&mut self, other: &Self) -> &mut Self {
        self.phase += other.phase;
        self.indices.extend_from_slice(&other.indices);
        self
    }

    /// Return `true` if `self` and `other` commute.
    ///
    /// Monomials of *a* and *b* distinct operators sharing *s* of them
    /// commute exactly when *ab* - *s* is even.
    pub fn commutes_with(&self, other: &Self) -> bool {
        let a = self.normalized().indices;
        let b = other.normalized().indices;
        let shared
            = a.iter().merge_join_by(b.iter(), |x, y| x.cmp(y))
            .filter(|either| either.is_both())
            .count();
        (a.len() * b.len() - shared) % 2 == 0
    }

    /// Convert to a Pauli string by multiplying together the Jordan-Wigner
    /// image of each operator in order.
    pub fn to_pauli_string(&self) -> PauliString {
        let mut acc = PauliString::new(self.phase, Vec::new());
        for &k in self.indices.iter() {
            trace!(index = k, "multiplying in Majorana generator");
            acc.combine_assign(&PauliString::from_majorana_index(k));
        }
        acc
    }

    fn fmt_with(&self, f: &mut fmt::Formatter<'_>, symbol: &str) -> fmt::Result {
        write!(f, "{}", self.phase)?;
        let n = self.indices.len();
        for (j, k) in self.indices.iter().enumerate() {
            write!(f, "{}{}", symbol, k)?;
            if j < n - 1 { write!(f, " ")?; }
        }
        Ok(())
    }

    /// Render `self` with `symbol` in place of the default `c`.
    pub fn display_with(&self, symbol: &str) -> String {
        struct With<'a>(&'a MajoranaString, &'a str);

        impl fmt::Display for With<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt_with(f, self.1)
            }
        }

        With(self, symbol).to_string()
    }

    /// Sample a random string of `len` indices below `max_index`, with a
    /// random phase.
    ///
    /// *Panics if `len > 0` and `max_index == 0`.*
    pub fn gen<R>(len: usize, max_index: usize, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        let phase = Phase::gen(rng);
        let indices = (0..len).map(|_| rng.gen_range(0..max_index)).collect();
        Self::new(phase, indices)
    }
}

// stable bubble sort returning the number of transpositions performed
fn bubble_sort(v: &mut [usize]) -> usize {
    let mut swaps: usize = 0;
    for i in 0..v.len() {
        let mut swapped = false;
        for j in 0..v.len() - i - 1 {
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
                swapped = true;
                swaps += 1;
            }
        }
        if !swapped { break; }
    }
    swaps
}
