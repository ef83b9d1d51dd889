//! Branches command implementation

use anyhow::Result;
use rp_core::Phase;

use crate::cli::{BranchesArgs, GlobalArgs, OutputFormat};
use crate::commands::common::{load_catalog, print_json};

/// Branch profile row for display
#[derive(Debug, serde::Serialize)]
struct BranchInfo {
    id: String,
    name: String,
    focus: String,
    highlights: Vec<String>,
    careers: Vec<String>,
    subjects: usize,
    foundation: u8,
    core: u8,
    advanced: u8,
    specialization: u8,
}

/// Execute the branches command
pub async fn execute(args: &BranchesArgs, global: &GlobalArgs) -> Result<()> {
    let catalog = load_catalog(global)?;

    let info: Vec<BranchInfo> = catalog
        .branches()
        .iter()
        .map(|b| BranchInfo {
            id: b.id.to_string(),
            name: b.name.clone(),
            focus: b.focus.clone(),
            highlights: b.highlights.clone(),
            careers: b.careers.clone(),
            subjects: b.subject_count(),
            foundation: b.phase_weight(Phase::Foundation),
            core: b.phase_weight(Phase::Core),
            advanced: b.phase_weight(Phase::Advanced),
            specialization: b.phase_weight(Phase::Specialization),
        })
        .collect();

    match args.output {
        OutputFormat::Table => print_table(&info),
        OutputFormat::Json => print_json(&info)?,
    }

    Ok(())
}

/// Print branches in table format
fn print_table(branches: &[BranchInfo]) {
    let name_width = branches
        .iter()
        .map(|b| b.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    println!(
        "{:<4}  {:<name_width$}  {:>8}  {:>5}  {:>4}  {:>4}  {:>4}",
        "ID",
        "NAME",
        "SUBJECTS",
        "FOUND",
        "CORE",
        "ADV",
        "SPEC",
        name_width = name_width
    );
    println!(
        "{:-<4}  {:-<name_width$}  {:-<8}  {:-<5}  {:-<4}  {:-<4}  {:-<4}",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width
    );

    for b in branches {
        println!(
            "{:<4}  {:<name_width$}  {:>8}  {:>4}%  {:>3}%  {:>3}%  {:>3}%",
            b.id,
            b.name,
            b.subjects,
            b.foundation,
            b.core,
            b.advanced,
            b.specialization,
            name_width = name_width
        );
    }

    println!("\n{} branches", branches.len());
}
