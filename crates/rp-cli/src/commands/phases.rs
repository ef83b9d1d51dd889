//! Phases command implementation

use anyhow::Result;
use rp_core::BranchCurriculum;

use crate::cli::{GlobalArgs, OutputFormat, PhasesArgs};
use crate::commands::common::{load_catalog, print_json};

/// Phase aggregate rows of one branch
#[derive(Debug, serde::Serialize)]
struct BranchPhases {
    branch: String,
    phases: Vec<PhaseInfo>,
}

#[derive(Debug, serde::Serialize)]
struct PhaseInfo {
    label: String,
    semesters: [u8; 2],
    weight: u8,
}

/// Execute the phases command
pub async fn execute(args: &PhasesArgs, global: &GlobalArgs) -> Result<()> {
    let catalog = load_catalog(global)?;

    let selected: Vec<&BranchCurriculum> = match &args.branch {
        Some(id) => vec![catalog.branch(id)?],
        None => catalog.branches().iter().collect(),
    };

    let info: Vec<BranchPhases> = selected.iter().map(|b| collect_phases(b)).collect();

    match args.output {
        OutputFormat::Json => print_json(&info)?,
        OutputFormat::Table => {
            for branch in &info {
                println!("{}", branch.branch);
                for phase in &branch.phases {
                    println!(
                        "  {:<16} (sem {}-{})  {:>3}%",
                        phase.label, phase.semesters[0], phase.semesters[1], phase.weight
                    );
                }
                println!();
            }
        }
    }

    Ok(())
}

fn collect_phases(branch: &BranchCurriculum) -> BranchPhases {
    BranchPhases {
        branch: branch.id.to_string(),
        phases: branch
            .phases
            .iter()
            .map(|a| PhaseInfo {
                label: a.label.clone(),
                semesters: a.phase.semesters(),
                weight: a.weight,
            })
            .collect(),
    }
}
