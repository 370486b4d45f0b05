//! Analysis API server.
//!
//! One read endpoint, `GET /api/analysis`, fronted by the analysis store:
//! a fresh cache entry is served as-is; otherwise the pipeline runs and
//! its result is stored before being returned. Concurrent requests racing
//! to regenerate are accepted; last write wins.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use calltone_application::ports::analysis_store::AnalysisStore;
use calltone_application::ports::model_gateway::ModelGateway;
use calltone_application::ports::transcript_source::TranscriptSource;
use calltone_application::use_cases::analyze_quarters::AnalyzeQuartersUseCase;
use calltone_domain::QuarterResult;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

/// Application state shared across API handlers
pub struct ApiState<S, G, C>
where
    S: TranscriptSource + 'static,
    G: ModelGateway + 'static,
    C: AnalysisStore + 'static,
{
    pub use_case: AnalyzeQuartersUseCase<S, G>,
    pub store: C,
}

/// Build the API router with permissive CORS.
pub fn router<S, G, C>(state: Arc<ApiState<S, G, C>>) -> Router
where
    S: TranscriptSource + 'static,
    G: ModelGateway + 'static,
    C: AnalysisStore + 'static,
{
    Router::new()
        .route("/api/analysis", get(get_analysis::<S, G, C>))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the API until the task is aborted.
pub async fn serve<S, G, C>(
    state: Arc<ApiState<S, G, C>>,
    bind: &str,
) -> Result<(), std::io::Error>
where
    S: TranscriptSource + 'static,
    G: ModelGateway + 'static,
    C: AnalysisStore + 'static,
{
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Serving analysis API on {}", bind);
    axum::serve(listener, router(state)).await
}

/// `GET /api/analysis`: cached when fresh, recomputed otherwise.
async fn get_analysis<S, G, C>(
    State(state): State<Arc<ApiState<S, G, C>>>,
) -> Result<Json<Vec<QuarterResult>>, (StatusCode, String)>
where
    S: TranscriptSource + 'static,
    G: ModelGateway + 'static,
    C: AnalysisStore + 'static,
{
    if let Some(cached) = state.store.load_fresh() {
        return Ok(Json(cached));
    }

    match state.use_case.execute().await {
        Ok(results) => {
            state.store.store(&results);
            Ok(Json(results))
        }
        Err(e) => {
            error!("Analysis pipeline failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
