//! Read-only JSON API over the catalog.
//!
//! Pre-computes every response at startup; the catalog is immutable, so the
//! handlers only clone strings. Intended as the data backend for an external
//! dashboard renderer.

use anyhow::Result;

use crate::cli::{GlobalArgs, ServeArgs};

/// Execute the serve command
pub async fn execute(args: &ServeArgs, global: &GlobalArgs) -> Result<()> {
    #[cfg(feature = "serve")]
    {
        imp::run(args, global).await
    }
    #[cfg(not(feature = "serve"))]
    {
        let _ = (args, global);
        anyhow::bail!(
            "The `serve` command requires the `serve` feature.\n\
             Rebuild with: cargo build -p rp-cli --features serve"
        );
    }
}

#[cfg(feature = "serve")]
mod imp {
    use anyhow::{Context, Result};
    use axum::extract::{Path, State};
    use axum::http::{header, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::Router;
    use rp_core::{subject_gauges, Catalog, Phase, PhaseAggregate, SubjectGauge};
    use serde::Serialize;
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower_http::compression::CompressionLayer;
    use tower_http::cors::CorsLayer;

    use crate::cli::{GlobalArgs, ServeArgs};
    use crate::commands::analytics;
    use crate::commands::common::load_catalog;

    /// Pre-computed application state shared across all handlers
    struct AppState {
        /// Index JSON (branch summaries, stats)
        index_json: String,
        /// Full branch docs keyed by id
        branch_docs: HashMap<String, String>,
        /// All three chart projections
        analytics_json: String,
        /// GATE plan
        gate_json: String,
        /// Year-wise roadmap
        roadmap_json: String,
    }

    /// Branch summary for the index endpoint
    #[derive(Debug, Serialize)]
    struct IndexBranch {
        id: String,
        name: String,
        focus: String,
        subject_count: usize,
    }

    /// Catalog-level stats
    #[derive(Debug, Serialize)]
    struct IndexStats {
        total_branches: usize,
        total_subjects: usize,
        gate_phases: usize,
        roadmap_years: usize,
    }

    /// Index response returned by /api/index.json
    #[derive(Debug, Serialize)]
    struct IndexResponse {
        branches: Vec<IndexBranch>,
        stats: IndexStats,
    }

    /// One semester of a branch doc, subjects carried as gauge rows
    #[derive(Debug, Serialize)]
    struct SemesterDoc {
        number: u8,
        phase: String,
        subjects: Vec<SubjectGauge>,
    }

    /// Full branch document returned by /api/branches/{id}
    #[derive(Debug, Serialize)]
    struct BranchDoc {
        id: String,
        name: String,
        focus: String,
        highlights: Vec<String>,
        careers: Vec<String>,
        phases: Vec<PhaseAggregate>,
        semesters: Vec<SemesterDoc>,
    }

    /// Run the server until interrupted
    pub(super) async fn run(args: &ServeArgs, global: &GlobalArgs) -> Result<()> {
        let catalog = load_catalog(global)?;

        println!("Building catalog API data...");
        let state = Arc::new(build_app_state(&catalog)?);

        let app = Router::new()
            .route("/api/index.json", get(get_index))
            .route("/api/branches/{id}", get(get_branch))
            .route("/api/analytics.json", get(get_analytics))
            .route("/api/gate.json", get(get_gate))
            .route("/api/roadmap.json", get(get_roadmap))
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive())
            .with_state(state);

        let addr: SocketAddr = format!("{}:{}", args.host, args.port)
            .parse()
            .context("Invalid host:port")?;

        println!("Serving catalog API at http://{}:{}", args.host, args.port);
        println!("Press Ctrl+C to stop.\n");

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind to {}:{}", args.host, args.port))?;
        axum::serve(listener, app)
            .await
            .context("HTTP server error")?;

        Ok(())
    }

    /// Build all pre-computed state from the catalog
    fn build_app_state(catalog: &Catalog) -> Result<AppState> {
        let mut index_branches = Vec::with_capacity(catalog.branches().len());
        let mut branch_docs = HashMap::with_capacity(catalog.branches().len());
        let mut total_subjects = 0;

        for branch in catalog.branches() {
            let subject_count = branch.subject_count();
            total_subjects += subject_count;

            index_branches.push(IndexBranch {
                id: branch.id.to_string(),
                name: branch.name.clone(),
                focus: branch.focus.clone(),
                subject_count,
            });

            let semesters = branch
                .semesters
                .iter()
                .map(|s| {
                    let phase = Phase::for_semester(s.number)
                        .map(|p| p.as_str().to_string())
                        .unwrap_or_default();
                    // Catalog construction guarantees the lookup succeeds.
                    let subjects = subject_gauges(catalog, branch.id.as_str(), s.number)?;
                    Ok(SemesterDoc {
                        number: s.number,
                        phase,
                        subjects,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            let doc = BranchDoc {
                id: branch.id.to_string(),
                name: branch.name.clone(),
                focus: branch.focus.clone(),
                highlights: branch.highlights.clone(),
                careers: branch.careers.clone(),
                phases: branch.phases.clone(),
                semesters,
            };
            branch_docs.insert(branch.id.to_string(), serde_json::to_string(&doc)?);
        }

        let index = IndexResponse {
            stats: IndexStats {
                total_branches: index_branches.len(),
                total_subjects,
                gate_phases: catalog.gate_plan().phases.len(),
                roadmap_years: catalog.roadmap().len(),
            },
            branches: index_branches,
        };

        Ok(AppState {
            index_json: serde_json::to_string(&index)?,
            branch_docs,
            analytics_json: serde_json::to_string(&analytics::build_doc(catalog)?)?,
            gate_json: serde_json::to_string(catalog.gate_plan())?,
            roadmap_json: serde_json::to_string(catalog.roadmap())?,
        })
    }

    /// GET /api/index.json
    async fn get_index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
        (
            [(header::CONTENT_TYPE, "application/json")],
            state.index_json.clone(),
        )
    }

    /// GET /api/branches/:id
    async fn get_branch(
        State(state): State<Arc<AppState>>,
        Path(id): Path<String>,
    ) -> impl IntoResponse {
        match state.branch_docs.get(&id) {
            Some(json) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                json.clone(),
            ),
            None => (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "application/json")],
                serde_json::json!({"error": format!("Branch '{}' not found", id)}).to_string(),
            ),
        }
    }

    /// GET /api/analytics.json
    async fn get_analytics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
        (
            [(header::CONTENT_TYPE, "application/json")],
            state.analytics_json.clone(),
        )
    }

    /// GET /api/gate.json
    async fn get_gate(State(state): State<Arc<AppState>>) -> impl IntoResponse {
        (
            [(header::CONTENT_TYPE, "application/json")],
            state.gate_json.clone(),
        )
    }

    /// GET /api/roadmap.json
    async fn get_roadmap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
        (
            [(header::CONTENT_TYPE, "application/json")],
            state.roadmap_json.clone(),
        )
    }
}
