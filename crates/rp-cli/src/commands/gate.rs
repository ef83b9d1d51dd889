//! Gate command implementation

use anyhow::Result;
use rp_core::GatePhase;

use crate::cli::{GateArgs, GlobalArgs, OutputFormat};
use crate::commands::common::{load_catalog, print_json};

/// Execute the gate command
pub async fn execute(args: &GateArgs, global: &GlobalArgs) -> Result<()> {
    let catalog = load_catalog(global)?;
    let plan = catalog.gate_plan();

    let selected: Vec<&GatePhase> = match args.phase {
        Some(number) => vec![plan.phase(number)?],
        None => plan.phases.iter().collect(),
    };

    match args.output {
        OutputFormat::Json => print_json(&selected)?,
        OutputFormat::Table => {
            for phase in selected {
                print_phase(phase);
            }
        }
    }

    Ok(())
}

fn print_phase(phase: &GatePhase) {
    println!(
        "Phase {} (months {}): {}",
        phase.number, phase.months, phase.title
    );

    for block in &phase.blocks {
        match (block.weightage, block.target_score) {
            (Some(weightage), Some(target)) => {
                println!(
                    "  {}: {} | weightage {}% | target score {}",
                    block.weeks, block.subject, weightage, target
                );
                for topic in &block.topics {
                    println!("    - {} ({}%)", topic.name, topic.weight);
                }
            }
            _ => {
                println!("  {}: {}", block.weeks, block.subject);
                for activity in &block.activities {
                    println!("    - {activity}");
                }
            }
        }
    }
    println!();
}
