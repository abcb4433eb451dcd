use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::image::Image;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    NotFound(PathBuf),
    Decode(PathBuf, String),
    Io(PathBuf, std::io::ErrorKind),
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "{}: not found", path.display()),
            Error::Decode(path, msg) => write!(f, "{}: failed to decode: {msg}", path.display()),
            Error::Io(path, kind) => write!(f, "{}: {kind}", path.display()),
        }
    }
}

/// Everything the batch driver needs from the outside world.
///
/// Relative paths are resolved against the implementation's base directory.
pub trait Filesystem {
    /// Names of the regular files directly inside `dir`, in no particular order.
    fn list(&self, dir: &Path) -> Result<Vec<String>>;
    fn exists(&self, path: &Path) -> bool;
    /// Reads and decodes an image into RGBA8.
    fn load_image(&self, path: &Path) -> Result<Image>;
    /// Creates or truncates `path`.
    fn write(&mut self, path: &Path, contents: &str) -> Result<()>;
}
