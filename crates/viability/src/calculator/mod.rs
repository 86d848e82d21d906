//! The viability calculator: rubric catalog, session state, scoring,
//! example presets, export projection, and the HTTP surface over them.

pub mod catalog;
pub mod export;
pub mod presets;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod state;

#[cfg(test)]
mod tests;

pub use catalog::{Category, CategoryCatalog, CategoryOption};
pub use export::{DocumentSink, ReportDocument, SinkError};
pub use presets::{ExamplePreset, PresetCatalog, PresetChoice, PresetError};
pub use report::{CalculatorReport, REPORT_TITLE};
pub use router::calculator_router;
pub use scoring::{compute_score, ScoreReadout, Tier, Verdict, SCORE_NORMALIZER};
pub use service::{
    CalculatorOverview, CalculatorService, CalculatorServiceError, CategoryView, PresetView,
};
pub use state::{
    BusinessIdentity, CalculatorState, IdentityField, SelectedOption, SelectionError,
};
