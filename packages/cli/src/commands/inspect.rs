use anyhow::Context;
use clap::Args;
use posterkit_editor::Session;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Container file to inspect
    pub container: PathBuf,

    /// Asset folder for relative image paths (defaults to the
    /// container's directory)
    #[arg(long)]
    pub assets: Option<PathBuf>,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let assets = args
        .assets
        .clone()
        .or_else(|| args.container.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut session = Session::open(&args.container, assets)
        .with_context(|| format!("failed to load {}", args.container.display()))?;

    let snapshot = session.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot.to_pruned_value())?);
    Ok(())
}
