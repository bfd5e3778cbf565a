//! Error types for decoding, sector selection and configuration loading.

use thiserror::Error;

/// Pseudohex digit conversion failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Value has no pseudohex digit (valid range is 0–33).
    #[error("value {0} is outside the pseudohex range 0-33")]
    OutOfRange(u32),

    /// Character is not part of the pseudohex alphabet.
    #[error("'{0}' is not a pseudohex digit")]
    UnknownSymbol(char),
}

/// What exactly is wrong with a profile code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileDefect {
    /// Code is not nine characters long.
    Length(usize),
    /// No dash in front of the technology digit.
    MissingDash,
    /// First character is not a starport class.
    Starport(char),
    /// A statistic digit failed pseudohex decoding.
    Digit(CodecError),
}

impl std::fmt::Display for ProfileDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Length(len) => write!(f, "expected 9 characters, found {}", len),
            Self::MissingDash => write!(f, "expected '-' before the technology digit"),
            Self::Starport(c) => write!(f, "'{}' is not a starport class", c),
            Self::Digit(e) => write!(f, "{}", e),
        }
    }
}

/// Failure to rebuild a world from encoded strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The universal world profile could not be decoded.
    #[error("malformed world profile '{code}': {defect}")]
    MalformedProfile {
        /// The code as supplied.
        code: String,
        /// First problem found.
        defect: ProfileDefect,
    },

    /// The PBG code is not exactly three digits.
    #[error("malformed PBG code '{code}': expected 3 digits")]
    MalformedPbg {
        /// The code as supplied.
        code: String,
    },

    /// A PBG digit failed pseudohex decoding.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Invalid sector selection or hex address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectorError {
    /// Subsector letters run A–P.
    #[error("unknown subsector '{0}'")]
    UnknownSubsector(char),

    /// Hex addresses are four digits, column then row.
    #[error("malformed hex address '{0}'")]
    MalformedHexAddress(String),
}

/// Failure loading a [`GeneratorConfig`](crate::config::GeneratorConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for the expected shape.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
