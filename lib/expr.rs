//! Complex linear combinations of Majorana monomials and a small calculator
//! for them.
//!
//! A [`MajoranaExpr`] is a finite sum Σ<sub>*k*</sub> *z*<sub>*k*</sub>
//! *m*<sub>*k*</sub> where every *m*<sub>*k*</sub> is a normalized product
//! of Majorana operators. Expressions can be built up with `+` and `*`, or
//! read from text with [`eval`]:
//! ```
//! use pauli_majorana::expr::eval;
//!
//! // c0 c1 and c1 c0 cancel
//! assert_eq!(eval("c0 c1 + c1 c0").unwrap().to_string(), "0");
//! assert_eq!(eval("(c0 + c1) * (c0 + c1)").unwrap().to_string(), "(2+0i)");
//! assert_eq!(eval("2i c1 c3").unwrap().to_string(), "(0+2i)c1c3");
//! ```

use std::{
    fmt,
    iter::{ Product, Sum },
    ops::{ Add, AddAssign, Mul },
    str::FromStr,
};
use num_complex::Complex64 as C64;
use rustc_hash::FxHashMap;
use tracing::trace;
use crate::{
    error::{ Error, PMResult },
    majorana::MajoranaString,
    phase::Phase,
};

/// Coefficients smaller than this in magnitude are dropped.
pub const EPSILON: f64 = 1e-14;

/// A complex linear combination of normalized Majorana monomials.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MajoranaExpr {
    terms: FxHashMap<Vec<usize>, C64>,
}

impl MajoranaExpr {
    /// The empty sum.
    pub fn zero() -> Self { Self::default() }

    /// The identity monomial with coefficient 1.
    pub fn one() -> Self { Self::scalar(1.0.into()) }

    /// A multiple of the identity.
    pub fn scalar(z: C64) -> Self {
        let mut out = Self::zero();
        out.add_term(Vec::new(), z);
        out
    }

    /// A single monomial with coefficient given by its phase.
    pub fn monomial(m: &MajoranaString) -> Self {
        let m = m.normalized();
        let mut out = Self::zero();
        out.add_term(m.indices, m.phase.as_complex());
        out
    }

    fn add_term(&mut self, key: Vec<usize>, z: C64) {
        let entry = self.terms.entry(key).or_insert_with(|| 0.0.into());
        *entry += z;
    }

    fn prune(&mut self) {
        self.terms.retain(|_, z| z.norm() >= EPSILON);
    }

    /// Return the number of terms with non-zero coefficient.
    pub fn len(&self) -> usize { self.terms.len() }

    /// Return `true` if `self` is the empty sum.
    pub fn is_zero(&self) -> bool { self.terms.is_empty() }

    /// Return the coefficient on the monomial with the same index set as
    /// `m`, accounting for the phase picked up by normalizing `m`.
    pub fn coeff(&self, m: &MajoranaString) -> C64 {
        let m = m.normalized();
        self.terms.get(&m.indices)
            .map(|z| *z * m.phase.as_complex().conj())
            .unwrap_or_else(|| 0.0.into())
    }

    /// Iterate over the terms in canonical order of their index lists.
    pub fn terms(&self) -> impl Iterator<Item = (&[usize], C64)> + '_ {
        let mut terms: Vec<(&[usize], C64)>
            = self.terms.iter()
            .map(|(k, z)| (k.as_slice(), *z))
            .collect();
        terms.sort_by(|l, r| l.0.cmp(r.0));
        terms.into_iter()
    }
}

impl From<MajoranaString> for MajoranaExpr {
    fn from(m: MajoranaString) -> Self { Self::monomial(&m) }
}

impl From<C64> for MajoranaExpr {
    fn from(z: C64) -> Self { Self::scalar(z) }
}

impl fmt::Display for MajoranaExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() { return write!(f, "0"); }
        let n = self.len();
        for (j, (key, z)) in self.terms().enumerate() {
            write!(f, "({})", z)?;
            for k in key.iter() {
                write!(f, "c{}", k)?;
            }
            if j < n - 1 { write!(f, " + ")?; }
        }
        Ok(())
    }
}

impl AddAssign<MajoranaExpr> for MajoranaExpr {
    fn add_assign(&mut self, rhs: MajoranaExpr) {
        rhs.terms.into_iter()
            .for_each(|(key, z)| { self.add_term(key, z); });
        self.prune();
    }
}

impl Add<MajoranaExpr> for MajoranaExpr {
    type Output = MajoranaExpr;

    fn add(mut self, rhs: MajoranaExpr) -> Self::Output {
        self += rhs;
        self
    }
}

impl Mul<MajoranaExpr> for MajoranaExpr {
    type Output = MajoranaExpr;

    fn mul(self, rhs: MajoranaExpr) -> Self::Output {
        let mut out = Self::zero();
        for (ka, za) in self.terms.iter() {
            for (kb, zb) in rhs.terms.iter() {
                let mut m = MajoranaString::new(Phase::Pi0, ka.clone());
                m.indices.extend_from_slice(kb);
                m.normalize();
                out.add_term(m.indices, za * zb * m.phase.as_complex());
            }
        }
        out.prune();
        out
    }
}

impl Mul<C64> for MajoranaExpr {
    type Output = MajoranaExpr;

    fn mul(mut self, rhs: C64) -> Self::Output {
        self.terms.values_mut().for_each(|z| { *z *= rhs; });
        self.prune();
        self
    }
}

impl Sum for MajoranaExpr {
    fn sum<I>(iter: I) -> Self
    where I: Iterator<Item = Self>
    {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl Product for MajoranaExpr {
    fn product<I>(iter: I) -> Self
    where I: Iterator<Item = Self>
    {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl FromStr for MajoranaExpr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> { eval(s) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    Plus,
    Times,
    Leaf(&'a str),
}

fn tokenize(s: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut leaf_start: Option<usize> = None;
    for (k, c) in s.char_indices() {
        let tok = match c {
            '(' => Some(Token::Open),
            ')' => Some(Token::Close),
            '+' => Some(Token::Plus),
            '*' => Some(Token::Times),
            c if c.is_whitespace() => None,
            _ => {
                leaf_start.get_or_insert(k);
                continue;
            },
        };
        if let Some(start) = leaf_start.take() {
            tokens.push(Token::Leaf(&s[start..k]));
        }
        if let Some(tok) = tok { tokens.push(tok); }
    }
    if let Some(start) = leaf_start {
        tokens.push(Token::Leaf(&s[start..]));
    }
    tokens
}

// recursive descent over
//   sum     := product ('+' product)*
//   product := factor ('*'? factor)*
//   factor  := '(' sum ')' | leaf
struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn error(&self, reason: impl Into<String>) -> Error {
        Error::MalformedExpr { input: self.input.to_string(), reason: reason.into() }
    }

    fn peek(&self) -> Option<Token<'a>> { self.tokens.get(self.pos).copied() }

    fn sum(&mut self) -> PMResult<MajoranaExpr> {
        let mut acc = self.product()?;
        while let Some(Token::Plus) = self.peek() {
            self.pos += 1;
            acc += self.product()?;
        }
        Ok(acc)
    }

    fn product(&mut self) -> PMResult<MajoranaExpr> {
        let mut acc = self.factor()?;
        loop {
            match self.peek() {
                Some(Token::Times) => {
                    self.pos += 1;
                    acc = acc * self.factor()?;
                },
                Some(Token::Open) | Some(Token::Leaf(_)) => {
                    acc = acc * self.factor()?;
                },
                _ => break,
            }
        }
        Ok(acc)
    }

    fn factor(&mut self) -> PMResult<MajoranaExpr> {
        match self.peek() {
            Some(Token::Open) => {
                self.pos += 1;
                let inner = self.sum()?;
                match self.peek() {
                    Some(Token::Close) => {
                        self.pos += 1;
                        Ok(inner)
                    },
                    _ => Err(self.error("unbalanced '('")),
                }
            },
            Some(Token::Leaf(text)) => {
                self.pos += 1;
                leaf(text).map_err(|reason| self.error(reason))
            },
            Some(Token::Close) => Err(self.error("unexpected ')'")),
            Some(Token::Plus) | Some(Token::Times) | None
                => Err(self.error("missing operand")),
        }
    }
}

// a finite complex literal or a single Majorana operator such as `c7`
fn leaf(text: &str) -> Result<MajoranaExpr, String> {
    match text {
        "i" => return Ok(MajoranaExpr::scalar(C64::i())),
        "-i" => return Ok(MajoranaExpr::scalar(-C64::i())),
        _ => { },
    }
    if let Ok(z) = text.parse::<C64>() {
        return if z.is_finite() {
            Ok(MajoranaExpr::scalar(z))
        } else {
            Err(format!("non-finite coefficient {:?}", text))
        };
    }
    let unrecognized = || format!("unrecognized token {:?}", text);
    let digits_at = text.find(|c: char| c.is_ascii_digit()).ok_or_else(unrecognized)?;
    let (symbol, digits) = text.split_at(digits_at);
    if symbol.is_empty()
        || !symbol.chars().all(|c| c.is_ascii_alphabetic())
        || !digits.chars().all(|c| c.is_ascii_digit())
    {
        return Err(unrecognized());
    }
    let k: usize = digits.parse().map_err(|_| unrecognized())?;
    Ok(MajoranaExpr::monomial(&MajoranaString::new(Phase::Pi0, vec![k])))
}

/// Evaluate a Majorana expression.
///
/// Terms are separated by `+`; factors are multiplied either with an
/// explicit `*` or by juxtaposition, and may be parenthesized. Each leaf is
/// a complex literal (`2`, `-1.5`, `3i`, `i`, `-i`) or a Majorana operator
/// written as a letter followed by its index (`c7`). There is no binary
/// minus; negate with a literal factor instead (`-1 c3`).
pub fn eval(text: &str) -> PMResult<MajoranaExpr> {
    let tokens = tokenize(text);
    trace!(input = text, tokens = tokens.len(), "evaluating expression");
    let mut parser = Parser { input: text, tokens, pos: 0 };
    let value = parser.sum()?;
    match parser.peek() {
        None => Ok(value),
        Some(Token::Close) => Err(parser.error("unbalanced ')'")),
        Some(tok) => Err(parser.error(format!("unexpected token {:?}", tok))),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn c(re: f64, im: f64) -> C64 { C64::new(re, im) }

    fn ms(s: &str) -> MajoranaString { s.parse().unwrap() }

    #[test]
    fn tokens() {
        assert_eq!(
            tokenize("(c0+2i)*c1 c2"),
            vec![
                Token::Open,
                Token::Leaf("c0"),
                Token::Plus,
                Token::Leaf("2i"),
                Token::Close,
                Token::Times,
                Token::Leaf("c1"),
                Token::Leaf("c2"),
            ],
        );
        assert_eq!(tokenize("   "), vec![]);
    }

    #[test]
    fn leaves() {
        assert_eq!(leaf("2"), Ok(MajoranaExpr::scalar(c(2.0, 0.0))));
        assert_eq!(leaf("-1.5"), Ok(MajoranaExpr::scalar(c(-1.5, 0.0))));
        assert_eq!(leaf("3i"), Ok(MajoranaExpr::scalar(c(0.0, 3.0))));
        assert_eq!(leaf("-i"), Ok(MajoranaExpr::scalar(c(0.0, -1.0))));
        assert_eq!(leaf("c7"), Ok(MajoranaExpr::from(ms("c7"))));
        assert!(leaf("γ7").is_err());
        assert!(leaf("c").is_err());
        assert!(leaf("c7x").is_err());
        assert!(leaf("7c").is_err());
    }

    #[test]
    fn anticommutation() {
        assert!(eval("c0 c1 + c1 c0").unwrap().is_zero());
        assert_eq!(eval("c2 c2").unwrap(), MajoranaExpr::one());
        assert_eq!(eval("c1 c0").unwrap(), MajoranaExpr::from(ms("-c0 c1")));
    }

    #[test]
    fn distribution() {
        let lhs = eval("(c0 + c1)(c2 + 3)").unwrap();
        let rhs = eval("c0 c2 + 3 c0 + c1 c2 + 3 * c1").unwrap();
        assert_eq!(lhs, rhs);
        assert_eq!(lhs.len(), 4);
        assert_eq!(lhs.coeff(&ms("c0")), c(3.0, 0.0));
        assert_eq!(lhs.coeff(&ms("c2 c1")), c(-1.0, 0.0));
    }

    #[test]
    fn square_of_sum() {
        let x = eval("(c0 + c1) * (c0 + c1)").unwrap();
        assert_eq!(x, MajoranaExpr::scalar(c(2.0, 0.0)));
        assert_eq!(x.to_string(), "(2+0i)");
    }

    #[test]
    fn display_order() {
        let x = eval("c3 + c0 c3 + 1 + c0").unwrap();
        assert_eq!(x.to_string(), "(1+0i) + (1+0i)c0 + (1+0i)c0c3 + (1+0i)c3");
        assert_eq!(MajoranaExpr::zero().to_string(), "0");
    }

    #[test]
    fn scalar_products() {
        let x = eval("i c1 * -i").unwrap();
        assert_eq!(x, MajoranaExpr::from(ms("c1")));
        let y = MajoranaExpr::from(ms("c1 c2")) * c(0.0, 2.0);
        assert_eq!(y.coeff(&ms("c1 c2")), c(0.0, 2.0));
        assert!((y * c(0.0, 0.0)).is_zero());
    }

    #[test]
    fn sums_and_products() {
        let terms = [ms("c0"), ms("c1"), ms("-c0")];
        let s: MajoranaExpr = terms.iter().cloned().map(MajoranaExpr::from).sum();
        assert_eq!(s, MajoranaExpr::from(ms("c1")));
        let p: MajoranaExpr = terms.iter().cloned().map(MajoranaExpr::from).product();
        // c0 c1 (-c0) = c0 c0 c1 = c1
        assert_eq!(p, MajoranaExpr::from(ms("c1")));
        let e: MajoranaExpr = std::iter::empty().product();
        assert_eq!(e, MajoranaExpr::one());
    }

    #[test]
    fn non_finite_literals() {
        for bad in ["nan c1", "inf", "2 * -inf", "NaN + c0"] {
            assert!(
                matches!(eval(bad), Err(Error::MalformedExpr { .. })),
                "{:?} should not evaluate",
                bad,
            );
        }
        assert_eq!(eval("1e3 c1").unwrap().coeff(&ms("c1")), c(1000.0, 0.0));
    }

    #[test]
    fn malformed() {
        for bad in ["", "c0 +", "+ c0", "(c0", "c0)", "()", "c0 * * c1", "c0 & c1", "c"] {
            assert!(
                matches!(eval(bad), Err(Error::MalformedExpr { .. })),
                "{:?} should not parse",
                bad,
            );
        }
    }
}
