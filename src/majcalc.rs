//! Evaluate sums and products of Majorana operators.
//!
//! Expressions are taken from the command line. If none are given, an
//! interactive prompt is started instead; it exits on Ctrl-C or Ctrl-D.

use std::process::ExitCode;
use clap::Parser;
use rustyline::{ error::ReadlineError, DefaultEditor };
use pauli_majorana::{
    cli::CommonArgs,
    expr::eval,
};

#[derive(Parser, Debug)]
#[command(name = "majcalc", version, about)]
struct Cli {
    /// Expressions, e.g. `(c0 + c1) * 2i c1`
    #[arg(allow_hyphen_values = true)]
    exprs: Vec<String>,

    #[command(flatten)]
    common: CommonArgs,
}

// print the value of a single expression, returning whether it was valid
fn eval_line(line: &str) -> bool {
    match eval(line) {
        Ok(value) => {
            println!("{}", value);
            true
        },
        Err(err) => {
            eprintln!("majcalc: {}", err);
            false
        },
    }
}

fn repl() -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline(">>> ") {
            Ok(line) => {
                if line.trim().is_empty() { continue; }
                rl.add_history_entry(line.as_str())?;
                eval_line(&line);
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => { return Err(err); },
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.common.init_logging();
    if cli.exprs.is_empty() {
        return match repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("majcalc: {}", err);
                ExitCode::FAILURE
            },
        };
    }
    let mut ok = true;
    for expr in cli.exprs.iter() {
        ok &= eval_line(expr);
    }
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn arguments() {
        let cli = Cli::parse_from(["majcalc", "--strict", "2i c1", "c0 c1"]);
        assert_eq!(cli.exprs, vec!["2i c1".to_string(), "c0 c1".to_string()]);
        assert!(cli.common.strict);
        assert!(Cli::parse_from(["majcalc"]).exprs.is_empty());
    }

    #[test]
    fn line_status() {
        assert!(eval_line("(c0 + c1) * 2i c1"));
        assert!(!eval_line("c0 +"));
        assert!(!eval_line("nan c1"));
    }
}
