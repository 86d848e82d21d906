use std::fs;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use viability::calculator::report::views::LineWeight;
use viability::calculator::{DocumentSink, ReportDocument, SinkError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps delivered documents in memory. The HTTP export response already
/// carries the full document, so the server needs no further side effect.
#[derive(Default, Clone)]
pub(crate) struct RecordingDocumentSink {
    documents: Arc<Mutex<Vec<ReportDocument>>>,
}

impl RecordingDocumentSink {
    pub(crate) fn documents(&self) -> Vec<ReportDocument> {
        self.documents.lock().expect("sink mutex poisoned").clone()
    }
}

impl DocumentSink for RecordingDocumentSink {
    fn deliver(&self, document: ReportDocument) -> Result<(), SinkError> {
        self.documents
            .lock()
            .expect("sink mutex poisoned")
            .push(document);
        Ok(())
    }
}

/// Plain-text stand-in for the document renderer: writes the lines under the
/// fixed download name (with a .txt extension) into the given directory.
/// With no directory configured it delivers nowhere, which suits dry runs.
pub(crate) struct TextFileSink {
    directory: Option<PathBuf>,
}

impl TextFileSink {
    pub(crate) fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }
}

impl DocumentSink for TextFileSink {
    fn deliver(&self, document: ReportDocument) -> Result<(), SinkError> {
        let Some(directory) = &self.directory else {
            return Ok(());
        };

        let mut path = directory.join(&document.file_name);
        path.set_extension("txt");

        let mut contents = String::new();
        for line in &document.lines {
            let indent = match line.weight {
                LineWeight::Heading => "",
                LineWeight::Body => "  ",
                LineWeight::Fine => "    ",
            };
            contents.push_str(indent);
            contents.push_str(&line.text);
            contents.push('\n');
        }

        fs::write(&path, contents).map_err(|err| SinkError::Unavailable(err.to_string()))
    }
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD HH:MM:SS ({err})"))
}
