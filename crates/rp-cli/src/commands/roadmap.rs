//! Roadmap command implementation

use anyhow::Result;

use crate::cli::{GlobalArgs, RoadmapArgs};
use crate::commands::common::load_catalog;

/// Execute the roadmap command
pub async fn execute(args: &RoadmapArgs, global: &GlobalArgs) -> Result<()> {
    let catalog = load_catalog(global)?;

    let roadmap = catalog.roadmap();
    if roadmap.is_empty() {
        println!("Dataset carries no roadmap.");
        return Ok(());
    }

    for year in roadmap {
        if let Some(selected) = args.year {
            if year.year != selected {
                continue;
            }
        }
        println!("Year {}: {}", year.year, year.title);
        for semester in &year.semesters {
            println!("  Semester {}", semester.number);
            for topic in &semester.topics {
                println!("    - {topic}");
            }
        }
        println!();
    }

    Ok(())
}
