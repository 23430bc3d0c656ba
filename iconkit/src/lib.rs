use image::{DynamicImage, GenericImageView, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

mod compose;
mod error;
pub mod layout;
pub mod target;

pub use compose::{compose, Icon, BACKGROUND};
pub use error::{Error, Result};
pub use layout::{FitLayout, FitParams};
pub use target::{IconTarget, Platform};

/// A decoded source logo. Never modified once loaded.
pub struct Logo {
    img: DynamicImage,
    path: Option<PathBuf>,
}

impl Logo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = reader(path)?.decode().map_err(|source| Error::Decode {
            path: Some(path.to_path_buf()),
            source,
        })?;
        tracing::debug!(
            "loaded logo {} ({}x{}, {:?})",
            path.display(),
            img.width(),
            img.height(),
            img.color()
        );
        Ok(Self {
            img,
            path: Some(path.to_path_buf()),
        })
    }

    /// Size of the logo at `path`, read from the image header only.
    pub fn dimensions_of<P: AsRef<Path>>(path: P) -> Result<(u32, u32)> {
        let path = path.as_ref();
        reader(path)?
            .into_dimensions()
            .map_err(|source| Error::Decode {
                path: Some(path.to_path_buf()),
                source,
            })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)
            .map_err(|source| Error::Decode { path: None, source })?;
        Ok(Self::from_image(img))
    }

    pub fn from_image(img: DynamicImage) -> Self {
        Self { img, path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    pub fn has_alpha(&self) -> bool {
        self.img.color().has_alpha()
    }

    pub fn image(&self) -> &DynamicImage {
        &self.img
    }
}

fn reader(path: &Path) -> Result<ImageReader<BufReader<File>>> {
    if !path.is_file() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let reader = ImageReader::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io(err),
    })?;
    Ok(reader.with_guessed_format()?)
}
