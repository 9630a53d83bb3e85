//! Tensor products of single-qubit Pauli operators with a global phase.
//!
//! A [`PauliString`] stores one [`Pauli`] per qubit, with qubit 0 leftmost in
//! the text encoding. Positions past the end of the stored operators are
//! implicitly the identity, so strings of different lengths can be multiplied
//! freely.
//!
//! # Example
//! ```
//! use pauli_majorana::pauli_string::PauliString;
//!
//! let mut p: PauliString = "XI".parse().unwrap();
//! p.apply_cz(0, 1);
//! assert_eq!(p.to_string(), "XZ");
//!
//! // X ⊗ Z = i c1 c2 c3 in the Jordan-Wigner picture
//! let m = p.to_majorana_string();
//! assert_eq!(m.to_string(), "+ic1 c2 c3");
//! assert_eq!(m.to_pauli_string(), p);
//! ```

use std::{ fmt, str::FromStr };
use itertools::{ EitherOrBoth, Itertools };
use nalgebra as na;
use num_complex::Complex64 as C64;
use rand::Rng;
use tracing::{ debug, trace, warn };
use crate::{
    error::{ Error, PMResult, Strictness },
    gate::Gate,
    majorana::MajoranaString,
    pauli::{ product, Pauli },
    phase::Phase,
};

/// A single `n`-qubit Pauli operator with a phase.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PauliString {
    pub phase: Phase,
    pub ops: Vec<Pauli>,
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.phase, f)?;
        self.ops.iter()
            .try_for_each(|p| fmt::Display::fmt(p, f))
    }
}

impl FromStr for PauliString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Strictness::Strict)
    }
}

/// Multiplies all strings together, left to right.
impl FromIterator<PauliString> for PauliString {
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = PauliString>
    {
        iter.into_iter()
            .fold(Self::default(), |mut acc, p| { acc.combine_assign(&p); acc })
    }
}

impl<'a> FromIterator<&'a PauliString> for PauliString {
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = &'a PauliString>
    {
        iter.into_iter()
            .fold(Self::default(), |mut acc, p| { acc.combine_assign(p); acc })
    }
}

impl PauliString {
    pub fn new(phase: Phase, ops: Vec<Pauli>) -> Self { Self { phase, ops } }

    /// Create the identity on `n` qubits.
    pub fn identity(n: usize) -> Self { Self::new(Phase::Pi0, vec![Pauli::I; n]) }

    /// Parse a string of the form `<phase><ops>`, where `<phase>` is an
    /// optional prefix understood by [`Phase::split_prefix`] and `<ops>` is a
    /// sequence of the characters `I`, `X`, `Y`, `Z`.
    ///
    /// Under [`Strictness::Lenient`], any other character is skipped (and
    /// logged); under [`Strictness::Strict`] it is an error.
    pub fn parse(s: &str, strictness: Strictness) -> PMResult<Self> {
        let (phase, body) = Phase::split_prefix(s);
        let offs = s.len() - body.len();
        let mut ops: Vec<Pauli> = Vec::with_capacity(body.len());
        for (k, c) in body.char_indices() {
            match Pauli::try_from(c) {
                Ok(p) => { ops.push(p); },
                Err(found) if strictness.is_strict() => {
                    return Err(Error::MalformedPauli {
                        input: s.to_string(),
                        position: offs + k,
                        found,
                    });
                },
                Err(found) => {
                    warn!(input = s, position = offs + k, "skipping {:?} in Pauli string", found);
                },
            }
        }
        Ok(Self { phase, ops })
    }

    /// Parse leniently; see [`Self::parse`].
    pub fn from_text(s: &str) -> Self {
        Self::parse(s, Strictness::Lenient).unwrap_or_default()
    }

    /// Return the image of the `n`-th Majorana operator under the
    /// Jordan-Wigner transformation.
    ///
    /// For `n = 2m` this is *Z* on qubits `0..m` followed by *Y* on qubit
    /// `m`; for `n = 2m + 1` it is *Z* on qubits `0..m` followed by *X* on
    /// qubit `m`. These generators pairwise anticommute and square to the
    /// identity.
    pub fn from_majorana_index(n: usize) -> Self {
        let m = n / 2;
        let mut ops = vec![Pauli::Z; m + 1];
        ops[m] = if n % 2 == 0 { Pauli::Y } else { Pauli::X };
        Self::new(Phase::Pi0, ops)
    }

    /// Return the number of stored qubit positions.
    pub fn num_qubits(&self) -> usize { self.ops.len() }

    /// Return the number of non-identity positions.
    pub fn weight(&self) -> usize {
        self.ops.iter().filter(|p| !p.is_identity()).count()
    }

    /// Return `true` if every position is the identity, regardless of phase.
    pub fn is_identity(&self) -> bool { self.ops.iter().all(|p| p.is_identity()) }

    /// Return a copy of `self` with trailing identities removed.
    pub fn trimmed(&self) -> Self {
        let len = self.ops.iter()
            .rposition(|p| !p.is_identity())
            .map(|k| k + 1)
            .unwrap_or(0);
        Self::new(self.phase, self.ops[..len].to_vec())
    }

    /// Return `true` if `self` and `other` are the same operator, treating
    /// missing positions as identities.
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.phase == other.phase
            && self.ops.iter().zip_longest(other.ops.iter())
                .all(|pair| match pair {
                    EitherOrBoth::Both(a, b) => a == b,
                    EitherOrBoth::Left(p) | EitherOrBoth::Right(p) => p.is_identity(),
                })
    }

    /// Return `true` if `self` and `other` commute.
    pub fn commutes_with(&self, other: &Self) -> bool {
        self.ops.iter().zip(&other.ops)
            .filter(|(a, b)| !a.commutes_with(**b))
            .count() % 2 == 0
    }

    /// Multiply `self` on the right by `other`, returning a new string.
    ///
    /// Positions past the end of the shorter operand are copied from the
    /// longer one.
    pub fn combine(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.combine_assign(other);
        out
    }

    /// Multiply `self` on the right by `other` in place.
    pub fn combine_assign(&mut self, other: &Self) -> &mut Self {
        self.phase += other.phase;
        for (a, b) in self.ops.iter_mut().zip(&other.ops) {
            let (ph, p) = product(*a, *b);
            self.phase += ph;
            *a = p;
        }
        if other.ops.len() > self.ops.len() {
            self.ops.extend_from_slice(&other.ops[self.ops.len()..]);
        }
        self
    }

    fn extend_to(&mut self, n: usize) {
        if n > self.ops.len() { self.ops.resize(n, Pauli::I); }
    }

    fn get_or_skip(&mut self, k: usize, gate: &str) -> Option<&mut Pauli> {
        let len = self.ops.len();
        let p = self.ops.get_mut(k);
        if p.is_none() {
            warn!(qubit = k, len, "{} on implicit identity ignored", gate);
        }
        p
    }

    /// Conjugate by a Hadamard on the `k`-th qubit: X ↔ Z, Y → -Y.
    ///
    /// Does nothing if `k` is out of bounds.
    pub fn apply_h(&mut self, k: usize) -> &mut Self {
        match self.get_or_skip(k, "H") {
            Some(p @ Pauli::X) => { *p = Pauli::Z; },
            Some(p @ Pauli::Z) => { *p = Pauli::X; },
            Some(Pauli::Y) => { self.phase += Phase::Pi; },
            _ => { },
        }
        self
    }

    /// Conjugate by an S gate on the `k`-th qubit: X → -Y, Y → X.
    ///
    /// Does nothing if `k` is out of bounds.
    pub fn apply_s(&mut self, k: usize) -> &mut Self {
        match self.get_or_skip(k, "S") {
            Some(p @ Pauli::X) => { *p = Pauli::Y; self.phase += Phase::Pi; },
            Some(p @ Pauli::Y) => { *p = Pauli::X; },
            _ => { },
        }
        self
    }

    /// Conjugate by the inverse of [`Self::apply_s`]: X → Y, Y → -X.
    ///
    /// Does nothing if `k` is out of bounds.
    pub fn apply_sdg(&mut self, k: usize) -> &mut Self {
        match self.get_or_skip(k, "S*") {
            Some(p @ Pauli::X) => { *p = Pauli::Y; },
            Some(p @ Pauli::Y) => { *p = Pauli::X; self.phase += Phase::Pi; },
            _ => { },
        }
        self
    }

    // conjugation by a Pauli flips the sign of every anticommuting position
    fn apply_pauli(&mut self, k: usize, pauli: Pauli) -> &mut Self {
        if let Some(p) = self.get_or_skip(k, "Pauli") {
            if !p.commutes_with(pauli) { self.phase += Phase::Pi; }
        }
        self
    }

    /// Conjugate by a Pauli X on the `k`-th qubit.
    pub fn apply_x(&mut self, k: usize) -> &mut Self { self.apply_pauli(k, Pauli::X) }

    /// Conjugate by a Pauli Y on the `k`-th qubit.
    pub fn apply_y(&mut self, k: usize) -> &mut Self { self.apply_pauli(k, Pauli::Y) }

    /// Conjugate by a Pauli Z on the `k`-th qubit.
    pub fn apply_z(&mut self, k: usize) -> &mut Self { self.apply_pauli(k, Pauli::Z) }

    /// Conjugate by a CZ gate on qubits `a` and `b`, extending `self` with
    /// identities if needed.
    ///
    /// Does nothing if `a == b`.
    pub fn apply_cz(&mut self, a: usize, b: usize) -> &mut Self {
        use Pauli::*;
        if a == b {
            warn!(qubit = a, "CZ on a single qubit ignored");
            return self;
        }
        self.extend_to(a.max(b) + 1);
        let (pa, pb, ph)
            = match (self.ops[a], self.ops[b]) {
                (I, I) => (I, I, Phase::Pi0),
                (I, X) => (Z, X, Phase::Pi0),
                (I, Y) => (Z, Y, Phase::Pi0),
                (I, Z) => (I, Z, Phase::Pi0),
                (X, I) => (X, Z, Phase::Pi0),
                (X, X) => (Y, Y, Phase::Pi0),
                (X, Y) => (Y, X, Phase::Pi ),
                (X, Z) => (X, I, Phase::Pi0),
                (Y, I) => (Y, Z, Phase::Pi0),
                (Y, X) => (X, Y, Phase::Pi ),
                (Y, Y) => (X, X, Phase::Pi0),
                (Y, Z) => (Y, I, Phase::Pi0),
                (Z, I) => (Z, I, Phase::Pi0),
                (Z, X) => (I, X, Phase::Pi0),
                (Z, Y) => (I, Y, Phase::Pi0),
                (Z, Z) => (Z, Z, Phase::Pi0),
            };
        self.ops[a] = pa;
        self.ops[b] = pb;
        self.phase += ph;
        self
    }

    /// Conjugate by a CNOT with control `c` and target `t`, extending `self`
    /// with identities if needed.
    ///
    /// Does nothing if `c == t`.
    pub fn apply_cx(&mut self, c: usize, t: usize) -> &mut Self {
        if c == t {
            warn!(qubit = c, "CX on a single qubit ignored");
            return self;
        }
        self.extend_to(c.max(t) + 1);
        self.apply_h(t).apply_cz(c, t).apply_h(t)
    }

    /// Conjugate by a swap of qubits `a` and `b`, extending `self` with
    /// identities if needed.
    pub fn apply_swap(&mut self, a: usize, b: usize) -> &mut Self {
        self.extend_to(a.max(b) + 1);
        self.ops.swap(a, b);
        self
    }

    /// Perform the action of a gate.
    ///
    /// Single-qubit gates do nothing if their qubit index is out of bounds;
    /// two-qubit gates do nothing if their indices are equal.
    pub fn apply_gate(&mut self, gate: Gate) -> &mut Self {
        trace!(%gate, "apply");
        match gate {
            Gate::H(k) => self.apply_h(k),
            Gate::S(k) => self.apply_s(k),
            Gate::Sdg(k) => self.apply_sdg(k),
            Gate::X(k) => self.apply_x(k),
            Gate::Y(k) => self.apply_y(k),
            Gate::Z(k) => self.apply_z(k),
            Gate::CZ(a, b) => self.apply_cz(a, b),
            Gate::CX(a, b) => self.apply_cx(a, b),
            Gate::Swap(a, b) => self.apply_swap(a, b),
        }
    }

    /// Like [`Self::apply_gate`], but fail instead of ignoring an
    /// out-of-bounds single-qubit index or a repeated two-qubit index.
    pub fn try_apply_gate(&mut self, gate: Gate) -> PMResult<&mut Self> {
        gate.validate(self.ops.len())?;
        Ok(self.apply_gate(gate))
    }

    /// Strict version of [`Self::apply_h`].
    pub fn try_apply_h(&mut self, k: usize) -> PMResult<&mut Self> {
        self.try_apply_gate(Gate::H(k))
    }

    /// Strict version of [`Self::apply_s`].
    pub fn try_apply_s(&mut self, k: usize) -> PMResult<&mut Self> {
        self.try_apply_gate(Gate::S(k))
    }

    /// Strict version of [`Self::apply_cz`].
    pub fn try_apply_cz(&mut self, a: usize, b: usize) -> PMResult<&mut Self> {
        self.try_apply_gate(Gate::CZ(a, b))
    }

    /// Perform a series of gates.
    pub fn apply_circuit<'a, I>(&mut self, gates: I) -> &mut Self
    where I: IntoIterator<Item = &'a Gate>
    {
        gates.into_iter().copied().for_each(|g| { self.apply_gate(g); });
        self
    }

    /// Convert to a product of Majorana operators.
    ///
    /// Qubits are scanned from highest to lowest. An X or Z at qubit `q`
    /// is cleared by multiplying on the right by the generator for `2q + 1`,
    /// after which a Y at the same position (including the one left behind
    /// by a Z) is cleared by the generator for `2q`. Generators only act as
    /// Z below their own qubit, so higher positions stay cleared and the
    /// remainder ends as a phase times the identity. The recorded indices,
    /// reversed, come out strictly increasing.
    pub fn to_majorana_string(&self) -> MajoranaString {
        let mut rem = self.clone();
        let mut indices: Vec<usize> = Vec::with_capacity(2 * rem.ops.len());
        for q in (0..rem.ops.len()).rev() {
            if matches!(rem.ops[q], Pauli::X | Pauli::Z) {
                indices.push(2 * q + 1);
                rem.combine_assign(&Self::from_majorana_index(2 * q + 1));
            }
            if rem.ops[q] == Pauli::Y {
                indices.push(2 * q);
                rem.combine_assign(&Self::from_majorana_index(2 * q));
            }
        }
        debug_assert!(rem.is_identity());
        indices.reverse();
        debug!(pauli = %self, majoranas = indices.len(), "converted to Majorana string");
        MajoranaString::new(rem.phase, indices)
    }

    /// Construct the 2<sup>*n*</sup> × 2<sup>*n*</sup> matrix of `self` in
    /// the *z*-basis, with qubit 0 as the leftmost tensor factor.
    pub fn as_matrix(&self) -> na::DMatrix<C64> {
        let init: na::DMatrix<C64>
            = na::DMatrix::from_diagonal_element(1, 1, self.phase.as_complex());
        self.ops.iter()
            .fold(init, |acc, p| acc.kronecker(p.as_matrix()))
    }

    /// Sample a uniformly random `n`-qubit string with a random phase.
    pub fn gen<R>(n: usize, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        let phase = Phase::gen(rng);
        Self::new(phase, Pauli::gen_many(n, rng))
    }

    /// Iterate over all 4<sup>*n*</sup> `n`-qubit strings with phase +1, in
    /// lexicographic order of the operators (I < X < Y < Z).
    pub fn all(n: usize) -> impl Iterator<Item = Self> {
        const OPS: [Pauli; 4] = [Pauli::I, Pauli::X, Pauli::Y, Pauli::Z];
        if n == 0 {
            itertools::Either::Left(std::iter::once(Self::default()))
        } else {
            itertools::Either::Right(
                (0..n).map(|_| OPS.into_iter())
                    .multi_cartesian_product()
                    .map(|ops| Self::new(Phase::Pi0, ops))
            )
        }
    }
}
