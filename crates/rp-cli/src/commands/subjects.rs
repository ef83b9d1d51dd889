//! Subjects command implementation

use anyhow::{Context, Result};
use rp_core::{subject_gauges, Phase};

use crate::cli::{GlobalArgs, OutputFormat, SubjectsArgs};
use crate::commands::common::{load_catalog, print_json};

/// Execute the subjects command
pub async fn execute(args: &SubjectsArgs, global: &GlobalArgs) -> Result<()> {
    let catalog = load_catalog(global)?;

    let gauges = subject_gauges(&catalog, &args.branch, args.semester)
        .context("Failed to resolve semester subjects")?;

    match args.output {
        OutputFormat::Json => print_json(&gauges)?,
        OutputFormat::Table => {
            let phase = Phase::for_semester(args.semester)
                .map(|p| p.as_str())
                .unwrap_or("-");
            println!(
                "{} semester {} ({} phase)\n",
                args.branch, args.semester, phase
            );

            let name_width = gauges
                .iter()
                .map(|g| g.name.len())
                .max()
                .unwrap_or(7)
                .max(7);
            println!("{:<name_width$}  WEIGHT", "SUBJECT", name_width = name_width);
            println!("{:-<name_width$}  ------", "", name_width = name_width);
            for gauge in &gauges {
                println!(
                    "{:<name_width$}  {:>5}%",
                    gauge.name,
                    gauge.weight,
                    name_width = name_width
                );
            }
        }
    }

    Ok(())
}
