use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::export::DocumentSink;
use super::report::views::{ReportLine, ReportView};
use super::service::{CalculatorService, CalculatorServiceError};
use super::state::IdentityField;

/// Router builder exposing the calculator's HTTP surface.
pub fn calculator_router<D>(service: Arc<CalculatorService<D>>) -> Router
where
    D: DocumentSink + 'static,
{
    Router::new()
        .route("/api/v1/calculator", get(overview_handler::<D>))
        .route("/api/v1/calculator/score", get(score_handler::<D>))
        .route("/api/v1/calculator/selection", post(selection_handler::<D>))
        .route("/api/v1/calculator/rationale", post(rationale_handler::<D>))
        .route("/api/v1/calculator/identity", post(identity_handler::<D>))
        .route("/api/v1/calculator/presets", get(presets_handler::<D>))
        .route("/api/v1/calculator/preset", post(load_preset_handler::<D>))
        .route("/api/v1/calculator/export", post(export_handler::<D>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SelectionRequest {
    pub(crate) category: usize,
    pub(crate) option: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RationaleRequest {
    pub(crate) category: usize,
    pub(crate) text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IdentityRequest {
    pub(crate) field: IdentityField,
    pub(crate) text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PresetRequest {
    pub(crate) name: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ExportRequest {
    /// Override for deterministic exports; defaults to now.
    #[serde(default)]
    pub(crate) generated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExportResponse {
    pub(crate) file_name: String,
    pub(crate) report: ReportView,
    pub(crate) lines: Vec<ReportLine>,
}

pub(crate) async fn overview_handler<D>(
    State(service): State<Arc<CalculatorService<D>>>,
) -> Response
where
    D: DocumentSink + 'static,
{
    Json(service.overview()).into_response()
}

pub(crate) async fn score_handler<D>(State(service): State<Arc<CalculatorService<D>>>) -> Response
where
    D: DocumentSink + 'static,
{
    Json(service.readout()).into_response()
}

pub(crate) async fn selection_handler<D>(
    State(service): State<Arc<CalculatorService<D>>>,
    Json(request): Json<SelectionRequest>,
) -> Response
where
    D: DocumentSink + 'static,
{
    match service.select_option(request.category, &request.option) {
        Ok(readout) => (StatusCode::OK, Json(readout)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn rationale_handler<D>(
    State(service): State<Arc<CalculatorService<D>>>,
    Json(request): Json<RationaleRequest>,
) -> Response
where
    D: DocumentSink + 'static,
{
    match service.set_rationale(request.category, request.text) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn identity_handler<D>(
    State(service): State<Arc<CalculatorService<D>>>,
    Json(request): Json<IdentityRequest>,
) -> Response
where
    D: DocumentSink + 'static,
{
    service.set_identity(request.field, request.text);
    StatusCode::NO_CONTENT.into_response()
}

pub(crate) async fn presets_handler<D>(State(service): State<Arc<CalculatorService<D>>>) -> Response
where
    D: DocumentSink + 'static,
{
    let presets: Vec<_> = service
        .presets()
        .iter()
        .map(|preset| {
            json!({
                "name": preset.name,
                "subtitle": preset.subtitle,
                "tier_hint": preset.tier_hint,
            })
        })
        .collect();
    Json(presets).into_response()
}

pub(crate) async fn load_preset_handler<D>(
    State(service): State<Arc<CalculatorService<D>>>,
    Json(request): Json<PresetRequest>,
) -> Response
where
    D: DocumentSink + 'static,
{
    match service.load_preset(&request.name) {
        Ok(readout) => (StatusCode::OK, Json(readout)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler<D>(
    State(service): State<Arc<CalculatorService<D>>>,
    request: Option<Json<ExportRequest>>,
) -> Response
where
    D: DocumentSink + 'static,
{
    let request = request.map(|Json(body)| body).unwrap_or_default();
    let generated_at = request.generated_at.unwrap_or_else(Utc::now);

    match service.export(generated_at) {
        Ok(report) => {
            let response = ExportResponse {
                file_name: service.export_file_name().to_string(),
                lines: report.lines(),
                report: report.view(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: CalculatorServiceError) -> Response {
    let status = match &error {
        CalculatorServiceError::Selection(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CalculatorServiceError::UnknownPreset { .. } => StatusCode::NOT_FOUND,
        CalculatorServiceError::Sink(_) => StatusCode::BAD_GATEWAY,
        CalculatorServiceError::Preset(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
