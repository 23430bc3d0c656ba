use crate::task::TaskRunner;
use crate::IconEnv;
use anyhow::{Context, Result};
use console::style;
use iconkit::{IconTarget, Logo};

/// Writes every target icon. A failing target does not stop the others.
pub fn generate(env: &IconEnv) -> Result<()> {
    let mut runner = TaskRunner::new(env.targets().len() as u32 + 1, env.verbose());

    runner.start_task("Load logo");
    let source = env.source();
    let logo = match Logo::open(&source) {
        Ok(logo) => logo,
        Err(err) => {
            runner.fail_task();
            return Err(err.into());
        }
    };
    runner.end_task();

    let mut failed = vec![];
    for target in env.targets() {
        runner.start_task(format!("Create {}", target.description()));
        match create_icon(env, &logo, target) {
            Ok(()) => runner.end_task(),
            Err(err) => {
                runner.fail_task();
                eprintln!("{} {:?}", style("[ERROR]").red(), err);
                failed.push(target.platform.to_string());
            }
        }
    }
    if !failed.is_empty() {
        anyhow::bail!("failed to create icons for {}", failed.join(", "));
    }
    Ok(())
}

fn create_icon(env: &IconEnv, logo: &Logo, target: &IconTarget) -> Result<()> {
    let mut icon = target
        .compose(logo)
        .with_context(|| format!("failed to compose {}", target.description()))?;
    if env.optimize() {
        icon.optimize();
    }
    let output = env.output(target);
    icon.save(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}
