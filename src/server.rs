use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::{AnalyzeRequest, ScoreRequest, ScoreResponse, VariantsRequest, VariantsResponse};
use draft_score::analysis::{AnalysisContext, AnalysisError, DeepAnalysisClient};
use draft_score::engine::{score_draft, score_variants};
use draft_score::features::extract_features;
use draft_score::history::{HistoryStore, LogSource, ScoreLogEntry};
use draft_score::insights::all_insights;
use draft_score::settings::ExtensionSettings;
use draft_score::{MediaType, PostTime};

#[derive(Clone)]
struct AppState {
    history: Arc<HistoryStore>,
    analysis: Option<DeepAnalysisClient>,
    settings: ExtensionSettings,
}

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    let (settings, settings_path) = ExtensionSettings::load(None)?;
    if let Some(path) = settings_path {
        tracing::info!(path = %path.display(), "loaded settings");
    }

    let history = HistoryStore::load(PathBuf::from(&args.history_path)).await?;

    let analysis = match DeepAnalysisClient::from_env() {
        Ok(client) => Some(client),
        Err(AnalysisError::MissingApiKey) => {
            tracing::info!("deep analysis disabled: no API key configured");
            None
        }
        Err(err) => return Err(err.to_string()),
    };

    let state = AppState {
        history: Arc::new(history),
        analysis,
        settings,
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/score", post(score_handler))
        .route("/api/variants", post(variants_handler))
        .route("/api/insights", get(insights_handler))
        .route("/api/history", get(history_handler).delete(clear_history_handler))
        .route("/api/analyze", post(analyze_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    tracing::info!(%addr, "starting server");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn score_handler(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, (StatusCode, String)> {
    let source = request.source.unwrap_or(LogSource::Api);
    let (tweet, request_user, when) = request
        .into_parts()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;

    // Request-supplied context wins over the persisted one.
    let user = request_user.or_else(|| state.settings.user_context.clone());
    let score = score_draft(&tweet, user.as_ref(), when);
    tracing::debug!(overall = score.overall, grade = score.grade.label(), "scored draft");

    let mut response = ScoreResponse::from_score(score, user.as_ref());

    if state.settings.analytics_enabled {
        let entry = ScoreLogEntry::from_score(&tweet, &response.score, source);
        let entry = state
            .history
            .append(entry)
            .await
            .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err))?;
        response.history_id = Some(entry.id);
    }

    Ok(Json(response))
}

async fn variants_handler(
    State(state): State<AppState>,
    Json(request): Json<VariantsRequest>,
) -> Result<Json<VariantsResponse>, (StatusCode, String)> {
    let text = request.text.unwrap_or_default();
    if text.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "text is required".to_string()));
    }

    let when = match request.utc_hour {
        Some(hour) => PostTime::new(hour, request.day_of_week.unwrap_or_else(|| PostTime::now().day_of_week)),
        None => PostTime::now(),
    };
    let user = request.user.or_else(|| state.settings.user_context.clone());

    let original_tweet = extract_features(&text).into_draft(false, None);
    let original = score_draft(&original_tweet, user.as_ref(), when);
    let variants = score_variants(&text, user.as_ref(), when);

    Ok(Json(VariantsResponse { original, variants }))
}

async fn insights_handler() -> impl IntoResponse {
    Json(all_insights())
}

async fn history_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.history.export().await)
}

async fn clear_history_handler(
    State(state): State<AppState>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .history
        .clear()
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<draft_score::analysis::AnalysisReport>, (StatusCode, String)> {
    let text = request.text.unwrap_or_default();
    if text.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "text is required".to_string()));
    }

    let Some(client) = state.analysis.as_ref() else {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            AnalysisError::MissingApiKey.to_string(),
        ));
    };

    let media_type = request.media.as_deref().and_then(MediaType::from_str);
    let context = AnalysisContext {
        has_media: request.has_media.unwrap_or(media_type.is_some()),
        media_type,
        is_premium: request.is_premium.unwrap_or(false),
        recent_posts: request.recent_posts,
    };

    let report = client
        .analyze(text.trim(), &context)
        .await
        .map_err(|err| (analysis_status(&err), err.to_string()))?;

    Ok(Json(report))
}

fn analysis_status(err: &AnalysisError) -> StatusCode {
    match err {
        AnalysisError::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
        AnalysisError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        AnalysisError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        AnalysisError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
    }
}
