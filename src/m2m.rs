//! Bring Majorana strings to normal order, printing one per line.

use std::process::ExitCode;
use clap::Parser;
use pauli_majorana::{
    cli::CommonArgs,
    majorana::{ MajoranaString, SYMBOL },
    PMResult,
};

#[derive(Parser, Debug)]
#[command(name = "m2m", version, about)]
struct Cli {
    /// Majorana strings, e.g. `c3 c1` or `-i 4 2 4`
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
        let mut majorana = MajoranaString::parse(s, cli.common.strictness())?;
        majorana.normalize();
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
            eprintln!("m2m: {}", err);
            ExitCode::FAILURE
        },
    }
}
