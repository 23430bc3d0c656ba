use crate::config::Config;
use anyhow::{Context, Result};
use clap::Parser;
use iconkit::{IconTarget, Platform};
use std::path::{Path, PathBuf};

pub mod command;
mod config;
mod task;

#[derive(Parser)]
pub struct IconArgs {
    /// Project directory. Relative paths in the manifest are
    /// resolved against it.
    #[clap(long, default_value = ".")]
    project_dir: PathBuf,
    /// Path to the manifest, defaults to `icons.yaml` in the
    /// project directory
    #[clap(long)]
    manifest: Option<PathBuf>,
    /// Logo to create the icons from
    #[clap(long, short)]
    source: Option<PathBuf>,
    /// Only create the icon for platform. Can be one of
    /// `ios` or `android`.
    #[clap(long)]
    platform: Option<Platform>,
    /// Use verbose output
    #[clap(long, short)]
    verbose: bool,
}

pub struct IconEnv {
    root: PathBuf,
    config: Config,
    targets: Vec<IconTarget>,
    verbose: bool,
}

impl IconEnv {
    pub fn new(args: IconArgs) -> Result<Self> {
        let root = dunce::canonicalize(&args.project_dir).with_context(|| {
            format!("project dir {} not found", args.project_dir.display())
        })?;
        let manifest = args
            .manifest
            .unwrap_or_else(|| root.join(config::MANIFEST));
        let mut config = Config::parse(&manifest)?;
        if let Some(source) = args.source {
            config.set_source(std::env::current_dir()?.join(source));
        }
        let platforms = match args.platform {
            Some(platform) => vec![platform],
            None => Platform::all().to_vec(),
        };
        let targets = platforms
            .into_iter()
            .map(|platform| config.target(platform))
            .collect::<Vec<_>>();
        for target in &targets {
            target
                .params()
                .with_context(|| format!("invalid {} settings", target.description()))?;
        }
        Ok(Self {
            root,
            config,
            targets,
            verbose: args.verbose,
        })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root
    }

    pub fn source(&self) -> PathBuf {
        self.root.join(self.config.source())
    }

    pub fn output(&self, target: &IconTarget) -> PathBuf {
        self.root.join(&target.output)
    }

    pub fn targets(&self) -> &[IconTarget] {
        &self.targets
    }

    pub fn optimize(&self) -> bool {
        self.config.optimize()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
