//! Analytics command implementation
//!
//! Projects the catalog into the chart-ready shapes an external dashboard
//! plots. The default JSON document carries all three charts so a renderer
//! can hydrate the whole analytics page from one query.

use anyhow::Result;
use rp_core::{
    branch_breakdown, phase_comparison, semester_progression, BreakdownSlice, Catalog,
    PhaseComparisonRow, ProgressionSeries,
};

use crate::cli::{AnalyticsArgs, ChartKind, GlobalArgs, OutputFormat};
use crate::commands::common::{load_catalog, print_json};

/// Breakdown slices of one branch
#[derive(Debug, serde::Serialize)]
pub(crate) struct BranchBreakdown {
    branch: String,
    slices: Vec<BreakdownSlice>,
}

/// All three charts in one document
#[derive(Debug, serde::Serialize)]
pub(crate) struct AnalyticsDoc {
    comparison: Vec<PhaseComparisonRow>,
    breakdowns: Vec<BranchBreakdown>,
    progression: Vec<ProgressionSeries>,
}

/// Build the full analytics document (shared with the serve command).
pub(crate) fn build_doc(catalog: &Catalog) -> Result<AnalyticsDoc> {
    Ok(AnalyticsDoc {
        comparison: phase_comparison(catalog),
        breakdowns: collect_breakdowns(catalog, None)?,
        progression: semester_progression(catalog),
    })
}

/// Execute the analytics command
pub async fn execute(args: &AnalyticsArgs, global: &GlobalArgs) -> Result<()> {
    let catalog = load_catalog(global)?;

    match args.chart {
        None => {
            let doc = AnalyticsDoc {
                comparison: phase_comparison(&catalog),
                breakdowns: collect_breakdowns(&catalog, args.branch.as_deref())?,
                progression: semester_progression(&catalog),
            };
            print_json(&doc)
        }
        // Per-chart selection below honors --output table; the combined
        // document is JSON-only.
        Some(ChartKind::Comparison) => {
            let rows = phase_comparison(&catalog);
            match args.output {
                OutputFormat::Json => print_json(&rows),
                OutputFormat::Table => {
                    print_comparison_table(&rows);
                    Ok(())
                }
            }
        }
        Some(ChartKind::Breakdown) => {
            let breakdowns = collect_breakdowns(&catalog, args.branch.as_deref())?;
            match args.output {
                OutputFormat::Json => print_json(&breakdowns),
                OutputFormat::Table => {
                    for b in &breakdowns {
                        println!("{}", b.branch);
                        for slice in &b.slices {
                            println!("  {:<16} {:>3}%", slice.label, slice.value);
                        }
                        println!();
                    }
                    Ok(())
                }
            }
        }
        Some(ChartKind::Progression) => {
            let series = semester_progression(&catalog);
            match args.output {
                OutputFormat::Json => print_json(&series),
                OutputFormat::Table => {
                    print_progression_table(&series);
                    Ok(())
                }
            }
        }
    }
}

/// Breakdowns for one branch, or every branch in catalog order.
fn collect_breakdowns(catalog: &Catalog, branch: Option<&str>) -> Result<Vec<BranchBreakdown>> {
    let ids: Vec<String> = match branch {
        Some(id) => vec![id.to_string()],
        None => catalog.branches().iter().map(|b| b.id.to_string()).collect(),
    };

    let mut breakdowns = Vec::with_capacity(ids.len());
    for id in ids {
        let slices = branch_breakdown(catalog, &id)?;
        breakdowns.push(BranchBreakdown { branch: id, slices });
    }
    Ok(breakdowns)
}

fn print_comparison_table(rows: &[PhaseComparisonRow]) {
    println!(
        "{:<8}  {:>10}  {:>5}  {:>8}  {:>14}",
        "BRANCH", "FOUNDATION", "CORE", "ADVANCED", "SPECIALIZATION"
    );
    for row in rows {
        println!(
            "{:<8}  {:>9}%  {:>4}%  {:>7}%  {:>13}%",
            row.branch.as_str(),
            row.foundation,
            row.core,
            row.advanced,
            row.specialization
        );
    }
}

fn print_progression_table(series: &[ProgressionSeries]) {
    print!("{:<8}", "BRANCH");
    for semester in 1..=8 {
        print!("  S{semester}");
    }
    println!();

    for s in series {
        print!("{:<8}", s.branch.as_str());
        for point in &s.points {
            print!("  {:>2}", point.weight);
        }
        println!();
    }
}
