use serde::{Deserialize, Serialize};

use super::report::views::ReportLine;

/// Finished export payload: the fixed download name plus the ordered lines
/// a document renderer lays out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub file_name: String,
    pub lines: Vec<ReportLine>,
}

/// Outbound hook for whatever renders and stores the exported report (PDF
/// writer, file download, test double). The summarizer itself never does I/O.
pub trait DocumentSink: Send + Sync {
    fn deliver(&self, document: ReportDocument) -> Result<(), SinkError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("document sink unavailable: {0}")]
    Unavailable(String),
}
