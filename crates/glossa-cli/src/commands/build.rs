use anyhow::{anyhow, Result};
use std::path::PathBuf;

use glossa_build::{BuildError, Config, Generator, RunSummary};

pub fn run_build(root: PathBuf, config: Config, dry_run: bool) -> Result<()> {
    let generator = Generator::new(root).with_config(config).dry_run(dry_run);
    log::info!("Starting build of {}", generator.root().display());

    match generator.run() {
        Ok(summary) => {
            print_summary(&summary);
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", failure_report(&err));
            Err(anyhow!(err).context(format!(
                "Failed to build documentation in {}",
                generator.root().display()
            )))
        }
    }
}

/// What to tell the user when a run fails: the path involved and, for
/// missing input, where it was expected to be.
fn failure_report(err: &BuildError) -> String {
    let mut report = String::from("\n✗ Build failed");
    if let Some(path) = err.path() {
        report.push_str("\n  Path: ");
        report.push_str(&path.display().to_string());
    }
    if err.is_missing_input() {
        report.push_str("\n  Hint: create it, or point --root at the documentation tree");
    }
    report
}

fn print_summary(summary: &RunSummary) {
    let verb = if summary.dry_run { "Would write" } else { "Wrote" };

    println!("\n📚 Glossa\n");
    println!("  Directories: {}", summary.directories);
    println!("  Notes scanned: {}", summary.notes);
    println!("  Keywords: {}", summary.keywords);
    println!("\n  {verb} {} documents:", summary.documents.len());
    for path in &summary.documents {
        println!("    {}", path.display());
    }

    if summary.dry_run {
        println!("\n✓ Dry run complete (nothing written)");
    } else {
        println!("\n✓ Build complete");
    }
}
