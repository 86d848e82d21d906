use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::catalog::{CategoryCatalog, CategoryOption};
use super::export::{DocumentSink, ReportDocument, SinkError};
use super::presets::{ExamplePreset, PresetCatalog, PresetError};
use super::report::CalculatorReport;
use super::scoring::{ScoreReadout, Tier};
use super::state::{BusinessIdentity, CalculatorState, IdentityField, SelectionError};

/// Facade composing the catalog, validated presets, the session state, and
/// the document collaborator. All operations are synchronous; the mutex only
/// guards against the HTTP layer's worker threads.
pub struct CalculatorService<D> {
    catalog: Arc<CategoryCatalog>,
    presets: PresetCatalog,
    state: Mutex<CalculatorState>,
    sink: Arc<D>,
    export_file_name: String,
}

impl<D> CalculatorService<D>
where
    D: DocumentSink + 'static,
{
    /// Builds the standard catalog and presets. Preset validation runs here
    /// so drifted preset data fails at startup, never at click time.
    pub fn new(sink: Arc<D>, export_file_name: impl Into<String>) -> Result<Self, PresetError> {
        let catalog = Arc::new(CategoryCatalog::standard());
        let presets = PresetCatalog::standard(&catalog)?;
        let state = Mutex::new(CalculatorState::new(catalog.clone()));

        Ok(Self {
            catalog,
            presets,
            state,
            sink,
            export_file_name: export_file_name.into(),
        })
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn presets(&self) -> &[ExamplePreset] {
        self.presets.list()
    }

    pub fn export_file_name(&self) -> &str {
        &self.export_file_name
    }

    pub fn select_option(
        &self,
        index: usize,
        label: &str,
    ) -> Result<ScoreReadout, CalculatorServiceError> {
        let mut state = self.lock_state();
        state.select_option(index, label)?;
        Ok(state.readout())
    }

    pub fn set_rationale(
        &self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), CalculatorServiceError> {
        let mut state = self.lock_state();
        state.set_rationale(index, text)?;
        Ok(())
    }

    pub fn set_identity(&self, field: IdentityField, text: impl Into<String>) {
        self.lock_state().set_identity(field, text);
    }

    pub fn load_preset(&self, name: &str) -> Result<ScoreReadout, CalculatorServiceError> {
        let preset = self
            .presets
            .find(name)
            .ok_or_else(|| CalculatorServiceError::UnknownPreset {
                name: name.to_string(),
            })?;

        let mut state = self.lock_state();
        state.load_preset(preset);
        info!(preset = name, "example preset loaded");
        Ok(state.readout())
    }

    pub fn readout(&self) -> ScoreReadout {
        self.lock_state().readout()
    }

    /// Full view model for the calculator page: every category with its
    /// current selection and rationale, the preset buttons, and the live
    /// readout.
    pub fn overview(&self) -> CalculatorOverview {
        let state = self.lock_state();

        let categories = self
            .catalog
            .categories()
            .iter()
            .enumerate()
            .map(|(index, category)| CategoryView {
                key: category.key,
                label: category.label,
                estimate: category.estimate,
                guidance: category.guidance,
                read_more_url: category.read_more_url,
                read_more_label: category.read_more_label,
                options: category.options.clone(),
                selection: state.chosen()[index]
                    .as_ref()
                    .map(|selection| selection.label.clone()),
                rationale: state.rationale()[index].clone(),
            })
            .collect();

        let presets = self
            .presets
            .list()
            .iter()
            .map(|preset| PresetView {
                name: preset.name,
                subtitle: preset.subtitle,
                tier_hint: preset.tier_hint,
                tier_hint_class: preset.tier_hint.css_class(),
            })
            .collect();

        CalculatorOverview {
            title: super::report::REPORT_TITLE,
            identity: state.identity().clone(),
            categories,
            presets,
            readout: state.readout(),
        }
    }

    /// Build the report from the current state and hand it to the document
    /// collaborator under the fixed download name.
    pub fn export(
        &self,
        generated_at: DateTime<Utc>,
    ) -> Result<CalculatorReport, CalculatorServiceError> {
        let report = {
            let state = self.lock_state();
            CalculatorReport::build(&state, generated_at)
        };

        self.sink.deliver(ReportDocument {
            file_name: self.export_file_name.clone(),
            lines: report.lines(),
        })?;
        info!(file = %self.export_file_name, "report handed to document sink");

        Ok(report)
    }

    fn lock_state(&self) -> MutexGuard<'_, CalculatorState> {
        self.state.lock().expect("calculator state mutex poisoned")
    }
}

/// Error raised by the calculator service.
#[derive(Debug, thiserror::Error)]
pub enum CalculatorServiceError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("no example preset named '{name}'")]
    UnknownPreset { name: String },
    #[error(transparent)]
    Preset(#[from] PresetError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// One category plus its live selection/rationale for the calculator view.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub key: &'static str,
    pub label: &'static str,
    pub estimate: &'static str,
    pub guidance: &'static str,
    pub read_more_url: &'static str,
    pub read_more_label: &'static str,
    pub options: Vec<CategoryOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<String>,
    pub rationale: String,
}

/// One preset button for the calculator view.
#[derive(Debug, Clone, Serialize)]
pub struct PresetView {
    pub name: &'static str,
    pub subtitle: &'static str,
    pub tier_hint: Tier,
    pub tier_hint_class: &'static str,
}

/// Everything the calculator page renders.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorOverview {
    pub title: &'static str,
    pub identity: BusinessIdentity,
    pub categories: Vec<CategoryView>,
    pub presets: Vec<PresetView>,
    pub readout: ScoreReadout,
}
