use crate::{compose, Error, FitParams, Icon, Logo, Result};
use std::path::{Path, PathBuf};

pub const IOS_SIZE: u32 = 1024;
pub const IOS_PADDING_PERCENT: u32 = 12;
pub const ANDROID_SIZE: u32 = 1024;
pub const ANDROID_PADDING_PERCENT: u32 = 20;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    pub fn all() -> [Self; 2] {
        [Self::Ios, Self::Android]
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Android => write!(f, "android"),
            Self::Ios => write!(f, "ios"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = Error;

    fn from_str(platform: &str) -> Result<Self> {
        Ok(match platform {
            "android" => Self::Android,
            "ios" => Self::Ios,
            _ => {
                return Err(Error::invalid(format!(
                    "unsupported platform {}",
                    platform
                )))
            }
        })
    }
}

/// One square icon to produce from the logo.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconTarget {
    pub platform: Platform,
    pub size: u32,
    pub padding_percent: u32,
    pub output: PathBuf,
}

impl IconTarget {
    /// App store icon, `assets/icon.png`.
    pub fn ios() -> Self {
        Self {
            platform: Platform::Ios,
            size: IOS_SIZE,
            padding_percent: IOS_PADDING_PERCENT,
            output: Path::new("assets").join("icon.png"),
        }
    }

    /// Adaptive launcher icon with a wider margin, `assets/adaptive-icon.png`.
    pub fn android_adaptive() -> Self {
        Self {
            platform: Platform::Android,
            size: ANDROID_SIZE,
            padding_percent: ANDROID_PADDING_PERCENT,
            output: Path::new("assets").join("adaptive-icon.png"),
        }
    }

    pub fn preset(platform: Platform) -> Self {
        match platform {
            Platform::Android => Self::android_adaptive(),
            Platform::Ios => Self::ios(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self.platform {
            Platform::Android => "android adaptive icon",
            Platform::Ios => "ios icon",
        }
    }

    pub fn params(&self) -> Result<FitParams> {
        FitParams::new(self.size, self.padding_percent)
    }

    pub fn compose(&self, logo: &Logo) -> Result<Icon> {
        let _span = tracing::debug_span!("compose", platform = %self.platform).entered();
        compose(logo, self.params()?)
    }
}
