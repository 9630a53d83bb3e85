//! Command-line plumbing shared by the binaries.

use clap::{ ArgAction, Args };
use tracing::Level;
use crate::{
    error::{ PMResult, Strictness },
    majorana::MajoranaString,
    pauli_string::PauliString,
};

/// Flags accepted by every binary.
#[derive(Args, Clone, Debug)]
pub struct CommonArgs {
    /// Reject malformed operands instead of skipping unknown characters
    #[arg(long)]
    pub strict: bool,

    /// Log more to stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    pub fn strictness(&self) -> Strictness {
        if self.strict { Strictness::Strict } else { Strictness::Lenient }
    }

    /// Install a stderr subscriber at the level selected by `-v`.
    pub fn init_logging(&self) {
        tracing_subscriber::fmt()
            .with_max_level(log_level(self.verbose))
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

/// Map a number of `-v` flags to a maximum log level, starting from
/// warnings.
pub fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Read an operand that may be written either as a Pauli string or as a
/// Majorana string, converting the latter with
/// [`MajoranaString::to_pauli_string`].
///
/// Anything containing a decimal digit is taken to be a Majorana string.
pub fn parse_operand(s: &str, strictness: Strictness) -> PMResult<PauliString> {
    if s.chars().any(|c| c.is_ascii_digit()) {
        MajoranaString::parse(s, strictness).map(|m| m.to_pauli_string())
    } else {
        PauliString::parse(s, strictness)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;

    #[test]
    fn levels() {
        assert_eq!(log_level(0), Level::WARN);
        assert_eq!(log_level(2), Level::DEBUG);
        assert_eq!(log_level(7), Level::TRACE);
    }

    #[test]
    fn operands() {
        assert_eq!(
            parse_operand("c0 c1", Strictness::Strict),
            Ok("-iZ".parse().unwrap()),
        );
        assert_eq!(parse_operand("-XZ", Strictness::Strict), Ok("-XZ".parse().unwrap()));
        assert_eq!(parse_operand("X_Z", Strictness::Lenient), Ok("XZ".parse().unwrap()));
        assert!(matches!(
            parse_operand("c18446744073709551614", Strictness::Strict),
            Err(Error::IndexTooLarge { .. }),
        ));
        assert!(matches!(
            parse_operand("X_Z", Strictness::Strict),
            Err(Error::MalformedPauli { position: 1, found: '_', .. }),
        ));
    }
}
