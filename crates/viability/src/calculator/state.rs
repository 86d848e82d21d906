use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::catalog::CategoryCatalog;
use super::presets::ExamplePreset;
use super::scoring::{compute_score, ScoreReadout};

/// A stored answer keeps both halves of the catalog pair: the weight feeds
/// scoring, the label re-renders the selector and appears in the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub weight: f64,
    pub label: String,
}

/// The two free-text fields naming the business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessIdentity {
    pub name: String,
    pub pitch: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityField {
    Name,
    Pitch,
}

/// Error raised by bounds-checked state mutators. These are programmer
/// errors from the form layer, so the contract is fail loudly, not recover.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("category index {index} out of range (catalog has {count} categories)")]
    InvalidCategory { index: usize, count: usize },
    #[error("option '{label}' is not offered by category '{category}'")]
    InvalidOption { category: String, label: String },
}

/// The calculator's entire mutable session state: one chosen option and one
/// rationale per category, plus the business identity. Created empty, lives
/// for the session, never persisted.
#[derive(Debug, Clone)]
pub struct CalculatorState {
    catalog: Arc<CategoryCatalog>,
    chosen: Vec<Option<SelectedOption>>,
    rationale: Vec<String>,
    identity: BusinessIdentity,
}

impl CalculatorState {
    pub fn new(catalog: Arc<CategoryCatalog>) -> Self {
        let count = catalog.len();
        Self {
            catalog,
            chosen: vec![None; count],
            rationale: vec![String::new(); count],
            identity: BusinessIdentity::default(),
        }
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn chosen(&self) -> &[Option<SelectedOption>] {
        &self.chosen
    }

    pub fn rationale(&self) -> &[String] {
        &self.rationale
    }

    pub fn identity(&self) -> &BusinessIdentity {
        &self.identity
    }

    /// Record the selection for one category. The label must name one of
    /// that category's options; nothing is mutated on failure.
    pub fn select_option(&mut self, index: usize, label: &str) -> Result<(), SelectionError> {
        let category = self
            .catalog
            .get(index)
            .ok_or(SelectionError::InvalidCategory {
                index,
                count: self.catalog.len(),
            })?;
        let option = category
            .option(label)
            .ok_or_else(|| SelectionError::InvalidOption {
                category: category.label.to_string(),
                label: label.to_string(),
            })?;

        self.chosen[index] = Some(SelectedOption {
            weight: option.weight,
            label: option.label.to_string(),
        });
        Ok(())
    }

    /// Stores the text verbatim; no trimming or validation.
    pub fn set_rationale(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), SelectionError> {
        if index >= self.rationale.len() {
            return Err(SelectionError::InvalidCategory {
                index,
                count: self.catalog.len(),
            });
        }
        self.rationale[index] = text.into();
        Ok(())
    }

    pub fn set_identity(&mut self, field: IdentityField, text: impl Into<String>) {
        match field {
            IdentityField::Name => self.identity.name = text.into(),
            IdentityField::Pitch => self.identity.pitch = text.into(),
        }
    }

    /// Overwrite every selection and both identity fields in one synchronous
    /// step. Rationale text survives a preset load: presets only carry
    /// selections and identity, so whatever notes were typed stay put.
    /// Preset data is validated against the catalog at construction time,
    /// which keeps this operation total.
    pub fn load_preset(&mut self, preset: &ExamplePreset) {
        self.chosen = preset
            .choices
            .iter()
            .map(|choice| {
                Some(SelectedOption {
                    weight: choice.weight,
                    label: choice.label.to_string(),
                })
            })
            .collect();
        self.identity = BusinessIdentity {
            name: preset.name.to_string(),
            pitch: preset.subtitle.to_string(),
        };
    }

    /// Derived on every read; nothing is cached.
    pub fn score(&self) -> f64 {
        compute_score(&self.chosen)
    }

    pub fn readout(&self) -> ScoreReadout {
        ScoreReadout::from_chosen(&self.chosen)
    }
}
