//! Error types.

use thiserror::Error;

/// Errors raised by the dot product kernels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DotProductError {
    /// One of the input slices holds fewer elements than requested.
    #[error("length mismatch: requested {requested} elements, x has {x_len}, y has {y_len}")]
    LengthMismatch {
        requested: usize,
        x_len: usize,
        y_len: usize,
    },
}

/// Errors raised while generating inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("cannot allocate input vectors of {len} elements")]
    Allocation { len: usize },
}

/// Errors raised by the probe collector.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("probe {test}/{variable} is already recorded")]
    Duplicate { test: String, variable: String },
    #[error("failed to dump probes: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading the command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown option: {0}")]
    UnknownFlag(String),
    #[error("option {0} requires a value")]
    MissingValue(&'static str),
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    DotProduct(#[from] DotProductError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Probe(#[from] ProbeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("variant verification failed: {0}")]
    Verification(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
