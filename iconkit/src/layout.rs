use crate::{Error, Result};

/// Deformation below this percentage counts as an exact fit.
pub const MAX_DEFORMATION_PERCENT: f64 = 0.1;

/// Side length of the square canvas and the padding inset on every side,
/// as an integer percentage of that side length.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FitParams {
    size: u32,
    padding_percent: u32,
}

impl FitParams {
    pub fn new(size: u32, padding_percent: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::invalid("canvas size must be positive"));
        }
        if padding_percent >= 100 {
            return Err(Error::invalid(format!(
                "padding of {}% is out of range, expected less than 100%",
                padding_percent
            )));
        }
        let params = Self {
            size,
            padding_percent,
        };
        let padding = params.padding();
        if padding >= size - padding {
            return Err(Error::invalid(format!(
                "padding of {}% leaves no safe area on a {}px canvas",
                padding_percent, size
            )));
        }
        Ok(params)
    }

    pub fn size(self) -> u32 {
        self.size
    }

    pub fn padding_percent(self) -> u32 {
        self.padding_percent
    }

    /// Padding in pixels, rounded down.
    pub fn padding(self) -> u32 {
        (u64::from(self.size) * u64::from(self.padding_percent) / 100) as u32
    }

    pub fn safe_area(self) -> u32 {
        let padding = self.padding();
        self.size - padding - padding
    }
}

/// Placement of a scaled logo on the canvas.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FitLayout {
    pub params: FitParams,
    pub source_width: u32,
    pub source_height: u32,
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

impl FitLayout {
    /// Fits a `source_width` x `source_height` raster into the safe area of
    /// `params`. The longer relative side fills the safe area, the other one
    /// is scaled by the same factor and rounded half away from zero.
    pub fn compute(params: FitParams, source_width: u32, source_height: u32) -> Result<Self> {
        if source_width == 0 || source_height == 0 {
            return Err(Error::invalid(format!(
                "logo has no pixels ({}x{})",
                source_width, source_height
            )));
        }
        let safe_area = params.safe_area();
        let aspect_ratio = f64::from(source_width) / f64::from(source_height);
        let (width, height) = if aspect_ratio >= 1.0 {
            let height = (f64::from(safe_area) / aspect_ratio).round() as u32;
            (safe_area, height.max(1))
        } else {
            let width = (f64::from(safe_area) * aspect_ratio).round() as u32;
            (width.max(1), safe_area)
        };
        let size = params.size();
        Ok(Self {
            params,
            source_width,
            source_height,
            width,
            height,
            x: (size - width) / 2,
            y: (size - height) / 2,
        })
    }

    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.source_width) / f64::from(self.source_height)
    }

    pub fn scaled_aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Relative difference between the scaled and the original aspect ratio,
    /// in percent.
    pub fn deformation_percent(&self) -> f64 {
        let original = self.aspect_ratio();
        (self.scaled_aspect_ratio() - original).abs() / original * 100.0
    }

    pub fn is_undistorted(&self) -> bool {
        self.deformation_percent() < MAX_DEFORMATION_PERCENT
    }
}

impl std::fmt::Display for FitLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}x{} -> {}x{} at ({}, {}) on {}px canvas",
            self.source_width,
            self.source_height,
            self.width,
            self.height,
            self.x,
            self.y,
            self.params.size()
        )
    }
}
