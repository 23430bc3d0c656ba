use anyhow::{Context, Result};
use iconkit::{IconTarget, Platform};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const MANIFEST: &str = "icons.yaml";

#[derive(Clone, Debug)]
pub struct Config {
    source: PathBuf,
    optimize: bool,
    ios: TargetConfig,
    android: TargetConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: Path::new("assets").join("logo.png"),
            optimize: false,
            ios: Default::default(),
            android: Default::default(),
        }
    }
}

impl Config {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Default::default());
        }
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&contents)
            .with_context(|| format!("invalid manifest {}", path.as_ref().display()))
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: RawConfig = serde_yaml::from_str(contents)?;
        let default = Self::default();
        Ok(Self {
            source: config.source.unwrap_or(default.source),
            optimize: config.optimize.unwrap_or_default(),
            ios: config.ios.unwrap_or_default(),
            android: config.android.unwrap_or_default(),
        })
    }

    pub fn set_source(&mut self, source: PathBuf) {
        self.source = source;
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn optimize(&self) -> bool {
        self.optimize
    }

    /// Preset for `platform` with the manifest overrides applied.
    pub fn target(&self, platform: Platform) -> IconTarget {
        let config = match platform {
            Platform::Android => &self.android,
            Platform::Ios => &self.ios,
        };
        let mut target = IconTarget::preset(platform);
        if let Some(size) = config.size {
            target.size = size;
        }
        if let Some(padding) = config.padding {
            target.padding_percent = padding;
        }
        if let Some(output) = &config.output {
            target.output = output.clone();
        }
        target
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    source: Option<PathBuf>,
    optimize: Option<bool>,
    ios: Option<TargetConfig>,
    android: Option<TargetConfig>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    size: Option<u32>,
    padding: Option<u32>,
    output: Option<PathBuf>,
}
