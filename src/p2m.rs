//! Convert Pauli strings to normalized Majorana strings under the
//! Jordan-Wigner transformation, printing one per line.

use std::process::ExitCode;
use clap::Parser;
use pauli_majorana::{
    cli::CommonArgs,
    majorana::SYMBOL,
    pauli_string::PauliString,
    PMResult,
};

#[derive(Parser, Debug)]
#[command(name = "p2m", version, about)]
struct Cli {
    /// Pauli strings, e.g. `XIZ` or `-iYY`
    #[arg(allow_hyphen_values = true)]
    strings: Vec<String>,

    /// Symbol printed in front of each Majorana index
    #[arg(long, default_value = SYMBOL)]
    symbol: String,

    #[command(flatten)]
    common: CommonArgs,
}

fn run(cli: &Cli) -> PMResult<()> {
    for s in cli.strings.iter() {
        let pauli = PauliString::parse(s, cli.common.strictness())?;
        let majorana = pauli.to_majorana_string().normalized();
        println!("{}", majorana.display_with(&cli.symbol));
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.common.init_logging();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("p2m: {}", err);
            ExitCode::FAILURE
        },
    }
}
