//! Tools for manipulating Pauli strings and products of Majorana operators,
//! and for converting between the two through the Jordan-Wigner
//! transformation.
//!
//! Pauli strings can be conjugated by Clifford-group gates (Hadamard, phase,
//! Pauli, controlled-Z/X, and swap); Majorana strings can be brought to a
//! canonical sorted form with the sign tracked. Linear combinations of
//! Majorana monomials are handled by [`expr`].
//!
//! # Example
//! ```
//! use pauli_majorana::prelude::*;
//!
//! let m: MajoranaString = "c3 c0".parse().unwrap();
//! let p = m.to_pauli_string();
//! assert_eq!(p.to_string(), "-iXX");
//! assert_eq!(p.to_majorana_string(), m.normalized());
//! ```

pub mod error;
pub mod phase;
pub mod pauli;
pub mod gate;
pub mod pauli_string;
pub mod majorana;
pub mod expr;
pub mod table;
pub mod cli;

pub use error::{ Error, PMResult, Strictness };

/// Re-exports of the most commonly used items.
pub mod prelude {
    pub use crate::{
        error::{ Error, PMResult, Strictness },
        expr::{ eval, MajoranaExpr },
        gate::Gate,
        majorana::MajoranaString,
        pauli::Pauli,
        pauli_string::PauliString,
        phase::Phase,
    };
}
