//! Validate command implementation
//!
//! Loading is validating: catalog construction enforces every dataset
//! invariant, so this command just loads and reports.

use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::commands::common::load_catalog;

/// Execute the validate command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let catalog = load_catalog(global)?;

    let subjects: usize = catalog.branches().iter().map(|b| b.subject_count()).sum();
    println!(
        "Dataset OK: {} branches, {} subjects, {} GATE phases, {} roadmap years",
        catalog.branches().len(),
        subjects,
        catalog.gate_plan().phases.len(),
        catalog.roadmap().len()
    );

    for branch in catalog.branches() {
        let sum: u32 = branch.phases.iter().map(|a| u32::from(a.weight)).sum();
        println!("  {}: phase weights sum to {}", branch.id, sum);
    }

    Ok(())
}
