use super::catalog::CategoryCatalog;
use super::scoring::Tier;

/// One hand-authored choice carried by a preset, mirroring the catalog's
/// (weight, label) pair for its category position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetChoice {
    pub weight: f64,
    pub label: &'static str,
}

/// A named worked example the user can load with one click. `name` and
/// `subtitle` double as the identity fields after loading.
#[derive(Debug, Clone)]
pub struct ExamplePreset {
    pub name: &'static str,
    pub subtitle: &'static str,
    pub tier_hint: Tier,
    pub choices: Vec<PresetChoice>,
}

/// Error raised when preset data disagrees with the catalog. Raised at
/// catalog construction, never at click time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PresetError {
    #[error("preset '{preset}' carries {actual} choices but the catalog defines {expected} categories")]
    ChoiceCountMismatch {
        preset: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("preset '{preset}' references option '{label}' unknown to category '{category}'")]
    UnknownOption {
        preset: &'static str,
        category: &'static str,
        label: &'static str,
    },
    #[error(
        "preset '{preset}' stores weight {stored} for '{label}' but category '{category}' defines {defined}"
    )]
    WeightDrift {
        preset: &'static str,
        category: &'static str,
        label: &'static str,
        stored: f64,
        defined: f64,
    },
}

/// The built-in example presets, cross-checked against the catalog so the
/// hand-duplicated weight/label pairs cannot drift.
#[derive(Debug)]
pub struct PresetCatalog {
    presets: Vec<ExamplePreset>,
}

impl PresetCatalog {
    pub fn standard(catalog: &CategoryCatalog) -> Result<Self, PresetError> {
        let presets = standard_presets();
        for preset in &presets {
            validate_preset(preset, catalog)?;
        }
        Ok(Self { presets })
    }

    pub fn list(&self) -> &[ExamplePreset] {
        &self.presets
    }

    pub fn find(&self, name: &str) -> Option<&ExamplePreset> {
        self.presets.iter().find(|preset| preset.name == name)
    }
}

pub(crate) fn validate_preset(
    preset: &ExamplePreset,
    catalog: &CategoryCatalog,
) -> Result<(), PresetError> {
    if preset.choices.len() != catalog.len() {
        return Err(PresetError::ChoiceCountMismatch {
            preset: preset.name,
            expected: catalog.len(),
            actual: preset.choices.len(),
        });
    }

    for (choice, category) in preset.choices.iter().zip(catalog.categories()) {
        let option = category
            .option(choice.label)
            .ok_or(PresetError::UnknownOption {
                preset: preset.name,
                category: category.label,
                label: choice.label,
            })?;
        // Exact match: both sides are duplicated literals, not computed values.
        if option.weight != choice.weight {
            return Err(PresetError::WeightDrift {
                preset: preset.name,
                category: category.label,
                label: choice.label,
                stored: choice.weight,
                defined: option.weight,
            });
        }
    }

    Ok(())
}

fn standard_presets() -> Vec<ExamplePreset> {
    vec![
        ExamplePreset {
            name: "WP Engine",
            subtitle: "Hosting for WordPress",
            tier_hint: Tier::Strong,
            choices: vec![
                PresetChoice {
                    weight: 100_000_000.0,
                    label: "100,000,000",
                },
                PresetChoice {
                    weight: 0.1,
                    label: "0.1: Thought-leaders care/evangelize",
                },
                PresetChoice {
                    weight: 100.0,
                    label: "$100",
                },
                PresetChoice {
                    weight: 0.01,
                    label: "0.01: Every few years, hard to switch",
                },
                PresetChoice {
                    weight: 0.5,
                    label: "0.5: Indifferent or low-trust product",
                },
                PresetChoice {
                    weight: 0.5,
                    label: "0.5: Some best-in-class features",
                },
                PresetChoice {
                    weight: 1.0,
                    label: "1.0: Strong lock-in",
                },
            ],
        },
        ExamplePreset {
            name: "ConvertKit",
            subtitle: "Marketing for creators",
            tier_hint: Tier::Fundable,
            choices: vec![
                PresetChoice {
                    weight: 10_000_000.0,
                    label: "10,000,000",
                },
                PresetChoice {
                    weight: 1.0,
                    label: "1.0: Hard to find someone who doesn't care",
                },
                PresetChoice {
                    weight: 100.0,
                    label: "$100",
                },
                PresetChoice {
                    weight: 0.01,
                    label: "0.01: Every few years, hard to switch",
                },
                PresetChoice {
                    weight: 0.5,
                    label: "0.5: Indifferent or low-trust product",
                },
                PresetChoice {
                    weight: 0.5,
                    label: "0.5: Some best-in-class features",
                },
                PresetChoice {
                    weight: 0.5,
                    label: "0.5: Recurring revenue or problem",
                },
            ],
        },
        ExamplePreset {
            name: "Consumer Security",
            subtitle: "Help people protect their data",
            tier_hint: Tier::Floor,
            choices: vec![
                PresetChoice {
                    weight: 1_000_000_000.0,
                    label: "1,000,000,000",
                },
                PresetChoice {
                    weight: 0.01,
                    label: "0.01: Few agree or care",
                },
                PresetChoice {
                    weight: 10.0,
                    label: "$10",
                },
                PresetChoice {
                    weight: 0.01,
                    label: "0.01: Every few years, hard to switch",
                },
                PresetChoice {
                    weight: 0.5,
                    label: "0.5: Indifferent or low-trust product",
                },
                PresetChoice {
                    weight: 0.1,
                    label: "0.1: No material differentiation",
                },
                PresetChoice {
                    weight: 0.5,
                    label: "0.5: Recurring revenue or problem",
                },
            ],
        },
    ]
}
