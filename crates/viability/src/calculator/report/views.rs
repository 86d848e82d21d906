use serde::{Deserialize, Serialize};

use super::super::scoring::{Tier, Verdict};

/// Type size the document renderer applies to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineWeight {
    Heading,
    Body,
    Fine,
}

/// One renderer-ready line of the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub weight: LineWeight,
    pub text: String,
}

impl ReportLine {
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            weight: LineWeight::Heading,
            text: text.into(),
        }
    }

    pub fn body(text: impl Into<String>) -> Self {
        Self {
            weight: LineWeight::Body,
            text: text.into(),
        }
    }

    pub fn fine(text: impl Into<String>) -> Self {
        Self {
            weight: LineWeight::Fine,
            text: text.into(),
        }
    }
}

/// One category's slot in the export: always three pieces, with the
/// selection left empty when the category is unset.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntryView {
    pub category: &'static str,
    pub selection: String,
    pub rationale: String,
}

/// Serializable projection of the whole report for HTTP responses.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub title: &'static str,
    pub business_name: String,
    pub business_pitch: String,
    pub entries: Vec<ReportEntryView>,
    pub score: f64,
    pub score_display: String,
    pub verdict: Verdict,
    pub verdict_label: &'static str,
    pub tier: Tier,
    pub generated_at: String,
}
