use crate::layout::{FitLayout, FitParams};
use crate::{Error, Logo, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

/// Opaque white.
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Scales `logo` into the safe area of a square canvas without distortion and
/// centers it on an opaque background. Logos with an alpha channel are blended
/// source-over, opaque logos overwrite the canvas.
pub fn compose(logo: &Logo, params: FitParams) -> Result<Icon> {
    let (width, height) = logo.dimensions();
    let layout = FitLayout::compute(params, width, height)?;
    tracing::debug!(
        "padding {}px ({}%), safe area {}px, {}",
        params.padding(),
        params.padding_percent(),
        params.safe_area(),
        layout
    );
    let deformation = layout.deformation_percent();
    if layout.is_undistorted() {
        tracing::debug!("deformation {:.4}%", deformation);
    } else {
        tracing::warn!("logo deformed by {:.2}%: {}", deformation, layout);
    }

    let size = params.size();
    let mut canvas = RgbaImage::from_pixel(size, size, BACKGROUND);
    let scaled = imageops::resize(
        &logo.image().to_rgba8(),
        layout.width,
        layout.height,
        FilterType::Lanczos3,
    );
    let (x, y) = (i64::from(layout.x), i64::from(layout.y));
    if logo.has_alpha() {
        imageops::overlay(&mut canvas, &scaled, x, y);
    } else {
        imageops::replace(&mut canvas, &scaled, x, y);
    }
    Ok(Icon {
        img: DynamicImage::ImageRgba8(canvas),
        layout,
    })
}

/// A composed square icon.
pub struct Icon {
    img: DynamicImage,
    layout: FitLayout,
}

impl Icon {
    pub fn layout(&self) -> &FitLayout {
        &self.layout
    }

    pub fn image(&self) -> &DynamicImage {
        &self.img
    }

    /// Switches to the narrowest color type that holds every pixel exactly.
    pub fn optimize(&mut self) {
        let rgba = self.img.to_rgba8();
        let mut is_grayscale = true;
        let mut is_opaque = true;
        for pixel in rgba.pixels() {
            if pixel[0] != pixel[1] || pixel[1] != pixel[2] {
                is_grayscale = false;
            }
            if pixel[3] != 255 {
                is_opaque = false;
            }
            if !is_grayscale && !is_opaque {
                break;
            }
        }
        self.img = match (is_grayscale, is_opaque) {
            (true, true) => DynamicImage::ImageLuma8(self.img.to_luma8()),
            (true, false) => DynamicImage::ImageLumaA8(self.img.to_luma_alpha8()),
            (false, true) => DynamicImage::ImageRgb8(self.img.to_rgb8()),
            (false, false) => DynamicImage::ImageRgba8(rgba),
        };
    }

    pub fn write<W: Write + Seek>(&self, w: &mut W) -> Result<()> {
        self.img
            .write_to(w, ImageFormat::Png)
            .map_err(Error::Encode)
    }

    /// Writes the icon as PNG, creating missing parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut w = BufWriter::new(File::create(path)?);
        self.write(&mut w)?;
        w.flush()?;
        tracing::info!("wrote {} ({})", path.display(), self.layout);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{init_logger, solid_rgb, solid_rgba};
    use image::{GenericImageView, Rgb};
    use std::io::Cursor;

    fn close(a: Rgba<u8>, b: [u8; 4]) -> bool {
        a.0.iter().zip(b).all(|(a, b)| a.abs_diff(b) <= 2)
    }

    fn png_bytes(icon: &Icon) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(vec![]);
        icon.write(&mut buf)?;
        Ok(buf.into_inner())
    }

    #[test]
    fn opaque_logo_is_centered_on_white() -> Result<()> {
        init_logger();
        let logo = solid_rgb(400, 100, [0, 0, 255]);
        let icon = compose(&logo, FitParams::new(256, 12)?)?;
        let layout = *icon.layout();
        assert_eq!((layout.width, layout.height), (196, 49));
        assert_eq!((layout.x, layout.y), (30, 103));

        let img = icon.image().to_rgba8();
        assert_eq!(img.dimensions(), (256, 256));
        for (x, y) in [(0, 0), (255, 255), (29, 128), (128, 102), (128, 152)] {
            assert_eq!(*img.get_pixel(x, y), BACKGROUND, "({}, {})", x, y);
        }
        for (x, y) in [(30, 103), (225, 151), (128, 128)] {
            assert!(close(*img.get_pixel(x, y), [0, 0, 255, 255]), "({}, {})", x, y);
        }
        Ok(())
    }

    #[test]
    fn portrait_logo() -> Result<()> {
        let logo = solid_rgb(50, 200, [10, 20, 30]);
        let icon = compose(&logo, FitParams::new(128, 10)?)?;
        let layout = *icon.layout();
        // padding 12, safe area 104
        assert_eq!((layout.width, layout.height), (26, 104));
        assert_eq!((layout.x, layout.y), (51, 12));
        let img = icon.image().to_rgba8();
        assert_eq!(*img.get_pixel(50, 64), BACKGROUND);
        assert!(close(*img.get_pixel(64, 64), [10, 20, 30, 255]));
        Ok(())
    }

    #[test]
    fn transparent_logo_leaves_background() -> Result<()> {
        let logo = solid_rgba(300, 100, [0, 0, 0, 0]);
        let icon = compose(&logo, FitParams::new(64, 0)?)?;
        let img = icon.image().to_rgba8();
        assert!(img.pixels().all(|p| *p == BACKGROUND));
        Ok(())
    }

    #[test]
    fn translucent_logo_is_blended() -> Result<()> {
        let logo = solid_rgba(100, 100, [0, 0, 0, 128]);
        let icon = compose(&logo, FitParams::new(64, 20)?)?;
        let center = *icon.image().to_rgba8().get_pixel(32, 32);
        assert!(close(center, [127, 127, 127, 255]), "{:?}", center);
        Ok(())
    }

    #[test]
    fn zero_padding_touches_edges() -> Result<()> {
        let logo = solid_rgb(200, 100, [200, 0, 0]);
        let icon = compose(&logo, FitParams::new(64, 0)?)?;
        let img = icon.image().to_rgba8();
        assert!(close(*img.get_pixel(0, 32), [200, 0, 0, 255]));
        assert!(close(*img.get_pixel(63, 32), [200, 0, 0, 255]));
        assert_eq!(*img.get_pixel(32, 0), BACKGROUND);
        Ok(())
    }

    #[test]
    fn compose_is_deterministic() -> Result<()> {
        let mut gradient = image::RgbaImage::new(120, 40);
        for (x, y, pixel) in gradient.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 2) as u8, (y * 6) as u8, 90, (x + y) as u8]);
        }
        let logo = Logo::from_image(DynamicImage::ImageRgba8(gradient));
        let params = FitParams::new(96, 12)?;
        let a = png_bytes(&compose(&logo, params)?)?;
        let b = png_bytes(&compose(&logo, params)?)?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn optimize_narrows_color_type() -> Result<()> {
        let mut icon = compose(&solid_rgb(20, 10, [9, 9, 9]), FitParams::new(32, 0)?)?;
        icon.optimize();
        assert!(matches!(icon.image(), DynamicImage::ImageLuma8(_)));

        let mut icon = compose(&solid_rgb(20, 10, [9, 80, 9]), FitParams::new(32, 0)?)?;
        icon.optimize();
        assert!(matches!(icon.image(), DynamicImage::ImageRgb8(_)));
        assert_eq!(icon.image().get_pixel(0, 0), BACKGROUND);

        let decoded = Logo::from_bytes(&png_bytes(&icon)?)?;
        assert_eq!(decoded.dimensions(), (32, 32));
        assert!(!decoded.has_alpha());
        Ok(())
    }

    #[test]
    fn save_creates_parent_dirs() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join("iconkit-save-test");
        std::fs::remove_dir_all(&dir).ok();
        let path = dir.join("nested").join("icon.png");
        let icon = compose(&solid_rgb(16, 8, [0, 0, 0]), FitParams::new(24, 0)?)?;
        icon.save(&path)?;
        let decoded = image::open(&path)?.to_rgb8();
        assert_eq!(decoded.dimensions(), (24, 24));
        assert_eq!(*decoded.get_pixel(0, 0), Rgb([255, 255, 255]));
        std::fs::remove_dir_all(&dir).ok();
        Ok(())
    }
}
