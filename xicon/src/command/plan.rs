use crate::IconEnv;
use anyhow::Result;
use console::style;
use iconkit::{FitLayout, Logo};

/// Prints where the logo would land on every target canvas.
pub fn plan(env: &IconEnv) -> Result<()> {
    let source = env.source();
    let (width, height) = Logo::dimensions_of(&source)?;
    println!("logo {} ({}x{})", source.display(), width, height);
    for target in env.targets() {
        let layout = FitLayout::compute(target.params()?, width, height)?;
        println!();
        println!(
            "{} -> {}",
            style(target.description()).bold(),
            env.output(target).display()
        );
        print!("{}", report(&layout));
    }
    Ok(())
}

fn report(layout: &FitLayout) -> String {
    let params = layout.params;
    let deformation = layout.deformation_percent();
    let deformation = if layout.is_undistorted() {
        style(format!("{:.4}%", deformation)).green()
    } else {
        style(format!("{:.2}%", deformation)).yellow()
    };
    format!(
        "{:14}{}x{}\n{:14}{}px ({}%)\n{:14}{}x{}\n{:14}{}x{} ({:.3}:1, logo {:.3}:1)\n{:14}x={}, y={}\n{:14}{}\n",
        "canvas",
        params.size(),
        params.size(),
        "padding",
        params.padding(),
        params.padding_percent(),
        "safe area",
        params.safe_area(),
        params.safe_area(),
        "scaled",
        layout.width,
        layout.height,
        layout.scaled_aspect_ratio(),
        layout.aspect_ratio(),
        "position",
        layout.x,
        layout.y,
        "deformation",
        deformation,
    )
}
