//! Multiply a sequence of operators together, left to right.
//!
//! Operands containing a digit are read as Majorana strings and converted to
//! Pauli strings first; everything else is read as a Pauli string.

use std::process::ExitCode;
use clap::Parser;
use pauli_majorana::{
    cli::{ parse_operand, CommonArgs },
    majorana::SYMBOL,
    pauli_string::PauliString,
    PMResult,
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "prod", version, about)]
struct Cli {
    /// Print the product as a Majorana string
    #[arg(short, long)]
    majorana: bool,

    /// Symbol printed in front of each Majorana index
    #[arg(long, default_value = SYMBOL)]
    symbol: String,

    /// Pauli or Majorana strings
    #[arg(allow_hyphen_values = true)]
    strings: Vec<String>,

    #[command(flatten)]
    common: CommonArgs,
}

fn run(cli: &Cli) -> PMResult<()> {
    let operands: Vec<PauliString>
        = cli.strings.iter()
        .map(|s| parse_operand(s, cli.common.strictness()))
        .collect::<PMResult<_>>()?;
    let prod: PauliString = operands.iter().collect();
    debug!(operands = operands.len(), %prod, "multiplied");
    if cli.majorana {
        println!("{}", prod.to_majorana_string().display_with(&cli.symbol));
    } else {
        println!("{}", prod);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.common.init_logging();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("prod: {}", err);
            ExitCode::FAILURE
        },
    }
}
