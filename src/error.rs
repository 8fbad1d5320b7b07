//! Error types for the density-altitude crate.
use std::fmt::Display;

/// Error type for the crate.
///
/// Decoding and the performance calculations never fail, unknown values are reported as missing
/// instead. This type is only used by the helpers that bridge and check inputs.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PerfError {
    /// A value required to set up a calculation is not available.
    MissingValue(&'static str),
    /// An input is NaN or infinite.
    NonFinite(&'static str),
    /// The name of a model mode was not recognized.
    UnknownMode(String),
}

impl Display for PerfError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use PerfError::*;

        match self {
            MissingValue(name) => write!(f, "missing value required for calculation: {}", name),
            NonFinite(name) => write!(f, "input is not a finite number: {}", name),
            UnknownMode(name) => write!(
                f,
                "unknown model mode '{}', expected one of rot, precise, legacy",
                name
            ),
        }
    }
}

impl std::error::Error for PerfError {}

/// Shorthand for results.
pub type Result<T> = std::result::Result<T, PerfError>;
