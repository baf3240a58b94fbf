use anyhow::Context;
use clap::Args;
use colored::Colorize;
use posterkit_commands::run_batch;
use posterkit_editor::Session;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Container file to edit
    pub container: PathBuf,

    /// File with one command per line
    #[arg(short, long)]
    pub commands: PathBuf,

    /// Output container path (defaults to editing in place)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Asset folder for relative image paths (defaults to the
    /// container's directory)
    #[arg(long)]
    pub assets: Option<PathBuf>,
}

pub fn run(args: ApplyArgs) -> anyhow::Result<()> {
    let assets = args
        .assets
        .clone()
        .or_else(|| args.container.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut session = Session::open(&args.container, assets)
        .with_context(|| format!("failed to load {}", args.container.display()))?;

    let script = std::fs::read_to_string(&args.commands)
        .with_context(|| format!("failed to read {}", args.commands.display()))?;
    let lines: Vec<String> = script.lines().map(|l| l.to_string()).collect();

    let report = run_batch(&mut session, &lines);

    let output = args.output.unwrap_or(args.container);
    session
        .save(&output)
        .with_context(|| format!("failed to save {}", output.display()))?;

    println!(
        "{} {}/{} commands succeeded",
        if report.is_clean() {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        },
        report.succeeded,
        report.attempted
    );
    if !report.is_clean() {
        eprintln!("{}", report.error_report());
    }
    println!("saved {}", output.display());
    Ok(())
}
