use anyhow::Result;
use clap::{Parser, Subcommand};
use xicon::{command, IconArgs, IconEnv};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("XICON_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    args.command.run()
}

#[derive(Subcommand)]
enum Commands {
    /// Create the ios icon and the android adaptive icon
    Generate {
        #[clap(flatten)]
        args: IconArgs,
    },
    /// Show how the logo is placed on each icon without writing files
    Plan {
        #[clap(flatten)]
        args: IconArgs,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Self::Generate { args } => {
                let env = IconEnv::new(args)?;
                tracing::debug!("project dir {}", env.root_dir().display());
                command::generate(&env)?;
            }
            Self::Plan { args } => {
                let env = IconEnv::new(args)?;
                command::plan(&env)?;
            }
        }
        Ok(())
    }
}
