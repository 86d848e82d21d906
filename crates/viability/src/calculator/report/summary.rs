use chrono::{DateTime, Utc};

use super::super::scoring::{Tier, Verdict};
use super::super::state::{BusinessIdentity, CalculatorState};
use super::views::{ReportEntryView, ReportLine, ReportView};

pub const REPORT_TITLE: &str = "Is My Startup Viable?";

const ATTRIBUTION: [&str; 3] = [
    "Jason Cohen's 'Excuse me, is there a problem?' (https://longform.asmartbear.com/problem/)",
    "Calculator (www.adthatch.com/is-my-startup-viable)",
    "Say hello (https://www.linkedin.com/in/brent-sullivan-350230209/)",
];

/// One category's slot in the export.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub category: &'static str,
    pub selection: String,
    pub rationale: String,
}

/// Flattened, ordered projection of the session for the document
/// collaborator. Building it reads the live score once; nothing here
/// mutates or caches.
#[derive(Debug, Clone)]
pub struct CalculatorReport {
    pub identity: BusinessIdentity,
    pub entries: Vec<ReportEntry>,
    pub score: f64,
    pub verdict: Verdict,
    pub tier: Tier,
    pub generated_at: DateTime<Utc>,
}

impl CalculatorReport {
    /// Entry order always follows catalog order, regardless of the order
    /// the user filled the form in.
    pub fn build(state: &CalculatorState, generated_at: DateTime<Utc>) -> Self {
        let entries = state
            .catalog()
            .categories()
            .iter()
            .enumerate()
            .map(|(index, category)| ReportEntry {
                category: category.label,
                selection: state.chosen()[index]
                    .as_ref()
                    .map(|selection| selection.label.clone())
                    .unwrap_or_default(),
                rationale: state.rationale()[index].clone(),
            })
            .collect();

        let score = state.score();
        Self {
            identity: state.identity().clone(),
            entries,
            score,
            verdict: Verdict::from_score(score),
            tier: Tier::from_score(score),
            generated_at,
        }
    }

    /// Two decimal places; full precision is not carried into the document.
    pub fn score_display(&self) -> String {
        format!("{:.2}", self.score)
    }

    pub fn timestamp_display(&self) -> String {
        self.generated_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
    }

    pub fn view(&self) -> ReportView {
        ReportView {
            title: REPORT_TITLE,
            business_name: self.identity.name.clone(),
            business_pitch: self.identity.pitch.clone(),
            entries: self
                .entries
                .iter()
                .map(|entry| ReportEntryView {
                    category: entry.category,
                    selection: entry.selection.clone(),
                    rationale: entry.rationale.clone(),
                })
                .collect(),
            score: self.score,
            score_display: self.score_display(),
            verdict: self.verdict,
            verdict_label: self.verdict.label(),
            tier: self.tier,
            generated_at: self.timestamp_display(),
        }
    }

    /// Renderer-ready lines in the fixed export sequence: title, credits,
    /// identity, one heading/selection/rationale triple per category, then
    /// score, verdict, and the generation stamp.
    pub fn lines(&self) -> Vec<ReportLine> {
        let mut lines = Vec::new();

        lines.push(ReportLine::heading(REPORT_TITLE));
        for credit in ATTRIBUTION {
            lines.push(ReportLine::fine(credit));
        }

        lines.push(ReportLine::heading("Name of Startup"));
        lines.push(ReportLine::body(self.identity.name.clone()));
        lines.push(ReportLine::heading("Startup Idea"));
        lines.push(ReportLine::body(self.identity.pitch.clone()));

        for entry in &self.entries {
            lines.push(ReportLine::heading(entry.category));
            lines.push(ReportLine::body(entry.selection.clone()));
            lines.push(ReportLine::body(entry.rationale.clone()));
        }

        lines.push(ReportLine::heading(format!("Score: {}", self.score_display())));
        lines.push(ReportLine::body(format!("Result: {}", self.verdict.label())));
        lines.push(ReportLine::fine(format!(
            "Calculated {}",
            self.timestamp_display()
        )));

        lines
    }
}
