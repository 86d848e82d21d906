use super::common::*;
use crate::calculator::presets::{validate_preset, PresetCatalog, PresetChoice, PresetError};

#[test]
fn standard_presets_validate_against_the_standard_catalog() {
    let catalog = catalog();
    let presets = PresetCatalog::standard(&catalog).expect("built-ins validate");

    assert_eq!(presets.list().len(), 3);
    for preset in presets.list() {
        assert_eq!(preset.choices.len(), catalog.len());
    }
}

#[test]
fn presets_are_found_by_exact_name() {
    let catalog = catalog();
    let presets = PresetCatalog::standard(&catalog).expect("built-ins validate");

    assert!(presets.find("WP Engine").is_some());
    assert!(presets.find("wp engine").is_none());
    assert!(presets.find("Shrugworthy SaaS").is_none());
}

#[test]
fn validation_rejects_a_short_choice_list() {
    let catalog = catalog();
    let mut preset = preset("WP Engine");
    preset.choices.truncate(5);

    let error = validate_preset(&preset, &catalog).expect_err("length mismatch detected");

    assert_eq!(
        error,
        PresetError::ChoiceCountMismatch {
            preset: "WP Engine",
            expected: catalog.len(),
            actual: 5,
        }
    );
}

#[test]
fn validation_rejects_a_label_the_catalog_does_not_offer() {
    let catalog = catalog();
    let mut preset = preset("ConvertKit");
    preset.choices[1] = PresetChoice {
        weight: 1.0,
        label: "1.0: Everyone is desperate",
    };

    let error = validate_preset(&preset, &catalog).expect_err("unknown label detected");

    assert!(matches!(
        error,
        PresetError::UnknownOption {
            preset: "ConvertKit",
            category: "Self-Aware Market",
            ..
        }
    ));
}

#[test]
fn validation_rejects_weight_drift_behind_a_valid_label() {
    let catalog = catalog();
    let mut preset = preset("Consumer Security");
    // Same label as the catalog, but a weight copied wrong by one decimal.
    preset.choices[2] = PresetChoice {
        weight: 100.0,
        label: "$10",
    };

    let error = validate_preset(&preset, &catalog).expect_err("drifted weight detected");

    match error {
        PresetError::WeightDrift {
            preset: name,
            label,
            stored,
            defined,
            ..
        } => {
            assert_eq!(name, "Consumer Security");
            assert_eq!(label, "$10");
            assert_eq!(stored, 100.0);
            assert_eq!(defined, 10.0);
        }
        other => panic!("expected weight drift, got {other:?}"),
    }
}
