use super::common::*;
use crate::calculator::state::{IdentityField, SelectionError};

#[test]
fn selecting_stores_both_weight_and_label() {
    let mut state = state();

    state
        .select_option(2, "$100")
        .expect("lucrative market option exists");

    let stored = state.chosen()[2].as_ref().expect("selection stored");
    assert_eq!(stored.weight, 100.0);
    assert_eq!(stored.label, "$100");
}

#[test]
fn out_of_range_category_index_is_rejected() {
    let mut state = state();
    let count = state.catalog().len();

    let error = state
        .select_option(count + 2, "$100")
        .expect_err("index past the catalog is invalid");

    assert_eq!(
        error,
        SelectionError::InvalidCategory {
            index: count + 2,
            count,
        }
    );
}

#[test]
fn unknown_option_label_leaves_state_untouched() {
    let mut state = state();
    state.select_option(0, "10,000,000").expect("valid option");
    state
        .set_rationale(0, "about ten million prospects")
        .expect("valid index");

    let chosen_before = state.chosen().to_vec();
    let rationale_before = state.rationale().to_vec();
    let identity_before = state.identity().clone();

    let error = state
        .select_option(0, "10 million-ish")
        .expect_err("label not in the catalog");

    assert_eq!(
        error,
        SelectionError::InvalidOption {
            category: "Audience Size".to_string(),
            label: "10 million-ish".to_string(),
        }
    );
    assert_eq!(state.chosen(), chosen_before.as_slice());
    assert_eq!(state.rationale(), rationale_before.as_slice());
    assert_eq!(state.identity(), &identity_before);
}

#[test]
fn rationale_is_stored_verbatim() {
    let mut state = state();

    state
        .set_rationale(3, "  keep my spacing  ")
        .expect("valid index");

    assert_eq!(state.rationale()[3], "  keep my spacing  ");
}

#[test]
fn rationale_rejects_out_of_range_index() {
    let mut state = state();
    let count = state.catalog().len();

    let error = state
        .set_rationale(count, "never lands")
        .expect_err("index past the catalog is invalid");

    assert!(matches!(error, SelectionError::InvalidCategory { .. }));
    assert!(state.rationale().iter().all(String::is_empty));
}

#[test]
fn identity_fields_update_independently() {
    let mut state = state();

    state.set_identity(IdentityField::Name, "Acme Robotics");
    state.set_identity(IdentityField::Pitch, "Robots that file your taxes");

    assert_eq!(state.identity().name, "Acme Robotics");
    assert_eq!(state.identity().pitch, "Robots that file your taxes");

    state.set_identity(IdentityField::Name, "Acme");
    assert_eq!(state.identity().name, "Acme");
    assert_eq!(state.identity().pitch, "Robots that file your taxes");
}

#[test]
fn loading_a_preset_overwrites_selections_and_identity() {
    let mut state = state();
    state
        .select_option(TRUST_CATEGORY, ZERO_TRUST_LABEL)
        .expect("valid option");
    state.set_identity(IdentityField::Name, "Old Name");

    let preset = preset("ConvertKit");
    state.load_preset(&preset);

    assert_eq!(state.identity().name, "ConvertKit");
    assert_eq!(state.identity().pitch, "Marketing for creators");
    for (index, choice) in preset.choices.iter().enumerate() {
        let stored = state.chosen()[index].as_ref().expect("every slot filled");
        assert_eq!(stored.weight, choice.weight);
        assert_eq!(stored.label, choice.label);
    }
}

#[test]
fn loading_a_preset_keeps_typed_rationale() {
    let mut state = state();
    state
        .set_rationale(1, "interviewed 30 prospects last month")
        .expect("valid index");

    state.load_preset(&preset("WP Engine"));

    // Presets only carry selections and identity; notes stay put.
    assert_eq!(state.rationale()[1], "interviewed 30 prospects last month");
}
