//! Package icon loading and PNG conversion.

use crate::bundler::error::{Result, ValidationError};
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

/// Required icon width and height in pixels.
pub const ICON_SIZE: u32 = 256;

/// A decoded package icon.
pub struct Icon {
    path: PathBuf,
    image: DynamicImage,
}

impl std::fmt::Debug for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Icon")
            .field("path", &self.path)
            .field("dimensions", &self.image.dimensions())
            .finish()
    }
}

impl Icon {
    /// Decodes the image at `path`, sniffing the format from its contents.
    ///
    /// Any format the `image` crate understands is accepted; it is re-encoded
    /// as PNG when written to the archive.
    pub fn load(path: &Path) -> std::result::Result<Self, ValidationError> {
        let decode_err = |source| ValidationError::IconDecode {
            path: path.to_path_buf(),
            source,
        };

        let image = ImageReader::open(path)
            .map_err(|e| decode_err(image::ImageError::IoError(e)))?
            .with_guessed_format()
            .map_err(|e| decode_err(image::ImageError::IoError(e)))?
            .decode()
            .map_err(decode_err)?;

        log::debug!(
            "Decoded icon {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        Ok(Self {
            path: path.to_path_buf(),
            image,
        })
    }

    /// Returns `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Fails unless the icon is exactly [`ICON_SIZE`] square.
    pub fn ensure_dimensions(&self) -> std::result::Result<(), ValidationError> {
        let (width, height) = self.dimensions();
        if width == ICON_SIZE && height == ICON_SIZE {
            Ok(())
        } else {
            Err(ValidationError::InvalidIconDimensions {
                path: self.path.clone(),
                width,
                height,
            })
        }
    }

    /// Encodes the icon as PNG.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.image.write_to(&mut buffer, ImageFormat::Png)?;
        Ok(buffer.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, RgbaImage};
    use tempfile::TempDir;

    fn write_png(dir: &Path, width: u32, height: u32) -> PathBuf {
        let path = dir.join(format!("icon_{width}x{height}.png"));
        RgbaImage::new(width, height).save(&path).expect("save png");
        path
    }

    #[test]
    fn accepts_256_square() {
        let dir = TempDir::new().expect("temp dir");
        let icon = Icon::load(&write_png(dir.path(), 256, 256)).expect("decode");
        assert_eq!(icon.dimensions(), (256, 256));
        icon.ensure_dimensions().expect("256x256 is valid");
    }

    #[test]
    fn rejects_other_sizes() {
        let dir = TempDir::new().expect("temp dir");
        for (w, h) in [(128, 128), (300, 256), (256, 255)] {
            let icon = Icon::load(&write_png(dir.path(), w, h)).expect("decode");
            match icon.ensure_dimensions() {
                Err(ValidationError::InvalidIconDimensions { width, height, .. }) => {
                    assert_eq!((width, height), (w, h));
                }
                other => panic!("expected InvalidIconDimensions, got {other:?}"),
            }
        }
    }

    #[test]
    fn reencodes_other_formats_as_png() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("icon.bmp");
        RgbImage::from_pixel(256, 256, Rgb([10, 20, 30]))
            .save(&path)
            .expect("save bmp");

        let png = Icon::load(&path).expect("decode").to_png_bytes().expect("encode");
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        let round = image::load_from_memory_with_format(&png, ImageFormat::Png).expect("png");
        assert_eq!(round.dimensions(), (256, 256));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("icon.png");
        std::fs::write(&path, b"not an image").expect("write");
        assert!(matches!(
            Icon::load(&path),
            Err(ValidationError::IconDecode { .. })
        ));
    }
}
