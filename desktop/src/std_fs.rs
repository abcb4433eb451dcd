use std::path::{Path, PathBuf};

use log::{debug, info};
use sandpanel_core::{
    fs::{Error, Filesystem, Result},
    image::Image,
};

/// [`Filesystem`] on top of `std::fs`, decoding images with the `image` crate.
pub struct StdFilesystem {
    base_path: PathBuf,
}

impl StdFilesystem {
    pub fn new_with_base_path(base_path: PathBuf) -> Self {
        info!("Using StdFilesystem with base path: {:?}", base_path);
        StdFilesystem { base_path }
    }
}

fn io_error(path: &Path, err: std::io::Error) -> Error {
    match err.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        kind => Error::Io(path.to_path_buf(), kind),
    }
}

impl Filesystem for StdFilesystem {
    fn list(&self, dir: &Path) -> Result<Vec<String>> {
        let path = self.base_path.join(dir);
        let mut result = Vec::new();
        for entry in std::fs::read_dir(&path).map_err(|e| io_error(&path, e))? {
            let entry = entry.map_err(|e| io_error(&path, e))?;
            if entry.path().is_file() {
                result.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(result)
    }

    fn exists(&self, path: &Path) -> bool {
        self.base_path.join(path).exists()
    }

    fn load_image(&self, path: &Path) -> Result<Image> {
        let path = self.base_path.join(path);
        let decoded = image::open(&path)
            .map_err(|e| match e {
                image::ImageError::IoError(e) => io_error(&path, e),
                e => Error::Decode(path.clone(), e.to_string()),
            })?
            .into_rgba8();
        let (width, height) = decoded.dimensions();
        debug!("Loaded {} ({}x{})", path.display(), width, height);
        Image::from_rgba8(width, height, decoded.as_raw())
            .ok_or_else(|| Error::Decode(path, "pixel buffer size mismatch".into()))
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        let path = self.base_path.join(path);
        std::fs::write(&path, contents).map_err(|e| io_error(&path, e))
    }
}
