//! Tables of the action of the standard Clifford generators on one- and
//! two-qubit Pauli strings.

use std::{ fmt, str::FromStr };
use itertools::Itertools;
use crate::{
    gate::Gate,
    pauli_string::PauliString,
};

/// Gates with a tabulated conjugation action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GateKind {
    H,
    S,
    Sdg,
    CZ,
    CX,
}

impl GateKind {
    /// All tabulated gates.
    pub const ALL: [Self; 5] = [Self::H, Self::S, Self::Sdg, Self::CZ, Self::CX];

    /// Return the number of qubits the gate acts on.
    pub fn num_qubits(self) -> usize {
        match self {
            Self::H | Self::S | Self::Sdg => 1,
            Self::CZ | Self::CX => 2,
        }
    }

    /// Return the gate acting on the first one or two qubits.
    pub fn gate(self) -> Gate {
        match self {
            Self::H => Gate::H(0),
            Self::S => Gate::S(0),
            Self::Sdg => Gate::Sdg(0),
            Self::CZ => Gate::CZ(0, 1),
            Self::CX => Gate::CX(0, 1),
        }
    }

    // labels of U† and U in U† P U
    fn labels(self) -> (&'static str, &'static str) {
        match self {
            Self::H => ("H", "H"),
            Self::S => ("S*", "S"),
            Self::Sdg => ("S", "S*"),
            Self::CZ => ("CZ", "CZ"),
            Self::CX => ("CX", "CX"),
        }
    }
}

impl FromStr for GateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" => Ok(Self::H),
            "s" => Ok(Self::S),
            "sdg" | "s*" => Ok(Self::Sdg),
            "cz" => Ok(Self::CZ),
            "cx" | "cnot" => Ok(Self::CX),
            _ => Err(format!("unknown gate {:?}; expected one of h, s, sdg, cz, cx", s)),
        }
    }
}

/// A single entry of a conjugation table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConjugationRow {
    pub gate: GateKind,
    pub input: PauliString,
    pub output: PauliString,
}

struct Tensor<'a>(&'a PauliString);

impl fmt::Display for Tensor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0.phase, self.0.ops.iter().join(" ⊗ "))
    }
}

impl fmt::Display for ConjugationRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (l, r) = self.gate.labels();
        write!(f, "{} {} {} = {}", l, Tensor(&self.input), r, Tensor(&self.output))
    }
}

/// Conjugate every phase-1 Pauli string on the qubits of `gate`, in
/// lexicographic order.
pub fn conjugation_table(gate: GateKind) -> Vec<ConjugationRow> {
    PauliString::all(gate.num_qubits())
        .map(|input| {
            let mut output = input.clone();
            output.apply_gate(gate.gate());
            ConjugationRow { gate, input, output }
        })
        .collect()
}
