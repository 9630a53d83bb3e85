//! Print how H, S, S†, CZ and CX act on one- and two-qubit Pauli strings.

use clap::Parser;
use pauli_majorana::{
    cli::CommonArgs,
    table::{ conjugation_table, GateKind },
};

#[derive(Parser, Debug)]
#[command(name = "clifford_ops", version, about)]
struct Cli {
    /// Gates to tabulate (h, s, sdg, cz, cx); all of them if none are given
    gates: Vec<GateKind>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    cli.common.init_logging();
    let gates: &[GateKind]
        = if cli.gates.is_empty() { &GateKind::ALL } else { &cli.gates };
    for (k, gate) in gates.iter().enumerate() {
        if k > 0 { println!(); }
        for row in conjugation_table(*gate) {
            println!("{}", row);
        }
    }
}
