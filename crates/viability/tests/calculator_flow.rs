use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use viability::calculator::{
    CalculatorService, CategoryCatalog, DocumentSink, PresetCatalog, ReportDocument, SinkError,
    Tier, Verdict,
};

#[derive(Default)]
struct CapturingSink {
    documents: Mutex<Vec<ReportDocument>>,
}

impl CapturingSink {
    fn documents(&self) -> Vec<ReportDocument> {
        self.documents.lock().expect("sink mutex poisoned").clone()
    }
}

impl DocumentSink for CapturingSink {
    fn deliver(&self, document: ReportDocument) -> Result<(), SinkError> {
        self.documents
            .lock()
            .expect("sink mutex poisoned")
            .push(document);
        Ok(())
    }
}

#[test]
fn catalog_captures_the_rubric_structure() {
    let catalog = CategoryCatalog::standard();

    assert_eq!(catalog.len(), 7);
    assert!(!catalog.is_empty());

    for category in catalog.categories() {
        assert!(!category.options.is_empty(), "{} has options", category.label);
        for option in &category.options {
            assert!(option.weight.is_finite());
            assert!(option.weight >= 0.0);
        }
    }

    // Exactly one disqualifying zero-weight option exists, on the trust axis.
    let zero_options: Vec<_> = catalog
        .categories()
        .iter()
        .flat_map(|category| {
            category
                .options
                .iter()
                .filter(|option| option.weight == 0.0)
                .map(move |option| (category.label, option.label))
        })
        .collect();
    assert_eq!(
        zero_options,
        vec![(
            "Eager To Buy From You Specifically?",
            "0: They cannot buy from you"
        )]
    );

    // Labels are unique within each category; they are the wire identifiers.
    for category in catalog.categories() {
        for option in &category.options {
            let matches = category
                .options
                .iter()
                .filter(|candidate| candidate.label == option.label)
                .count();
            assert_eq!(matches, 1, "duplicate label in {}", category.label);
        }
    }
}

#[test]
fn presets_align_with_the_catalog_by_construction() {
    let catalog = CategoryCatalog::standard();
    let presets = PresetCatalog::standard(&catalog).expect("built-ins validate");

    let names: Vec<_> = presets.list().iter().map(|preset| preset.name).collect();
    assert_eq!(names, vec!["WP Engine", "ConvertKit", "Consumer Security"]);
}

#[test]
fn a_full_session_scores_exports_and_delivers() {
    let sink = Arc::new(CapturingSink::default());
    let service =
        CalculatorService::new(sink.clone(), "Startup_Details.pdf").expect("service builds");

    // Load the scale-up example and confirm the headline numbers.
    let readout = service.load_preset("WP Engine").expect("preset exists");
    assert_eq!(readout.score, 4.0);
    assert_eq!(readout.verdict, Verdict::ScaleUp);
    assert_eq!(readout.tier, Tier::Strong);
    assert_eq!(readout.tier_class, "bg-green-400");

    // Flip the trust axis to the disqualifying answer: the whole product
    // collapses to zero and the verdict falls back to TBD.
    let readout = service
        .select_option(4, "0: They cannot buy from you")
        .expect("valid option");
    assert_eq!(readout.score, 0.0);
    assert_eq!(readout.verdict, Verdict::Undetermined);
    assert_eq!(readout.verdict_label, "TBD");

    service
        .set_rationale(4, "no procurement path into the segment yet")
        .expect("valid index");

    let generated_at = Utc
        .with_ymd_and_hms(2023, 8, 4, 9, 30, 0)
        .single()
        .expect("valid timestamp");
    let report = service.export(generated_at).expect("export succeeds");

    assert_eq!(report.verdict, Verdict::Undetermined);
    assert_eq!(report.score_display(), "0.00");

    let documents = sink.documents();
    assert_eq!(documents.len(), 1);
    let document = &documents[0];
    assert_eq!(document.file_name, "Startup_Details.pdf");
    assert_eq!(document.lines.first().map(|line| line.text.as_str()), Some("Is My Startup Viable?"));
    assert_eq!(
        document.lines.last().map(|line| line.text.as_str()),
        Some("Calculated 2023-08-04 09:30:00 UTC")
    );
    assert!(document
        .lines
        .iter()
        .any(|line| line.text == "no procurement path into the segment yet"));
    assert!(document.lines.iter().any(|line| line.text == "Result: TBD"));
}
