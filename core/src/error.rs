use std::{fmt, path::PathBuf};

use crate::fs;

/// Error type for every conversion operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input image is not `expected`x`expected`
    SizeMismatch {
        expected: u32,
        width: u32,
        height: u32,
    },
    /// More transparent pixels than the device can simulate
    ParticleOverflow { count: usize, max: usize },
    /// Auto mode was started outside of the firmware source directory
    MissingMarker(PathBuf),
    InvalidArguments(&'static str),
    /// Two inputs of one batch map to the same C identifier
    SymbolCollision {
        symbol: String,
        first: PathBuf,
        second: PathBuf,
    },
    Fs(fs::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

impl From<fs::Error> for Error {
    fn from(err: fs::Error) -> Self {
        Error::Fs(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SizeMismatch {
                expected,
                width,
                height,
            } => write!(
                f,
                "expected image of size {expected}x{expected}, but got {width}x{height} instead"
            ),
            Error::ParticleOverflow { count, max } => write!(
                f,
                "got {count} particles, but only {max} are supported; check the image transparency layer"
            ),
            Error::MissingMarker(path) => write!(
                f,
                "{} not found, run from the directory containing it",
                path.display()
            ),
            Error::InvalidArguments(msg) => write!(f, "invalid arguments: {msg}"),
            Error::SymbolCollision {
                symbol,
                first,
                second,
            } => write!(
                f,
                "{} and {} both generate symbol {symbol}",
                first.display(),
                second.display()
            ),
            Error::Fs(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}
