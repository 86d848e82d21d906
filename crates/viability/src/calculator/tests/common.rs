use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::calculator::catalog::CategoryCatalog;
use crate::calculator::export::{DocumentSink, ReportDocument, SinkError};
use crate::calculator::presets::{ExamplePreset, PresetCatalog};
use crate::calculator::service::CalculatorService;
use crate::calculator::state::CalculatorState;

pub(super) const EXPORT_FILE: &str = "Startup_Details.pdf";

/// Index of the trust category carrying the rubric's only zero-weight option.
pub(super) const TRUST_CATEGORY: usize = 4;
pub(super) const ZERO_TRUST_LABEL: &str = "0: They cannot buy from you";

pub(super) fn catalog() -> Arc<CategoryCatalog> {
    Arc::new(CategoryCatalog::standard())
}

pub(super) fn state() -> CalculatorState {
    CalculatorState::new(catalog())
}

pub(super) fn preset(name: &str) -> ExamplePreset {
    let catalog = catalog();
    let presets = PresetCatalog::standard(&catalog).expect("standard presets validate");
    presets
        .find(name)
        .unwrap_or_else(|| panic!("preset '{name}' exists"))
        .clone()
}

pub(super) fn build_service() -> (CalculatorService<MemorySink>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::default());
    let service =
        CalculatorService::new(sink.clone(), EXPORT_FILE).expect("standard presets validate");
    (service, sink)
}

pub(super) fn failing_service() -> CalculatorService<FailingSink> {
    CalculatorService::new(Arc::new(FailingSink), EXPORT_FILE)
        .expect("standard presets validate")
}

pub(super) fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 8, 4, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default, Clone)]
pub(super) struct MemorySink {
    documents: Arc<Mutex<Vec<ReportDocument>>>,
}

impl MemorySink {
    pub(super) fn documents(&self) -> Vec<ReportDocument> {
        self.documents.lock().expect("sink mutex poisoned").clone()
    }
}

impl DocumentSink for MemorySink {
    fn deliver(&self, document: ReportDocument) -> Result<(), SinkError> {
        self.documents
            .lock()
            .expect("sink mutex poisoned")
            .push(document);
        Ok(())
    }
}

pub(super) struct FailingSink;

impl DocumentSink for FailingSink {
    fn deliver(&self, _document: ReportDocument) -> Result<(), SinkError> {
        Err(SinkError::Unavailable("renderer offline".to_string()))
    }
}
