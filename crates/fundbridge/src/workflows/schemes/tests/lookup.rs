use super::common::*;
use crate::workflows::schemes::domain::{Dimension, SchemeId};
use crate::workflows::schemes::filter::SchemeCategory;
use crate::workflows::schemes::lookup::{
    EligibilityForm, FormError, LookupError, LookupState, SchemeLookup,
};

fn fill(lookup: &mut SchemeLookup, form: &EligibilityForm) {
    for dimension in Dimension::ordered() {
        let value = form.value(dimension).expect("fixture form is complete");
        lookup.select(dimension, value).expect("form is open");
    }
}

#[test]
fn starts_browsing_without_results() {
    let lookup = SchemeLookup::new(shared_catalog());
    assert_eq!(lookup.state(), &LookupState::Browsing);
    assert!(!lookup.has_results());
    assert!(lookup.results().is_none());
    assert_eq!(lookup.visible_schemes().len(), 8);
}

#[test]
fn submitting_a_complete_form_opens_results() {
    let mut lookup = SchemeLookup::new(shared_catalog());
    lookup.open_form().expect("opens from browsing");
    fill(&mut lookup, &seed_stage_form());

    let matches = lookup.submit().expect("complete form evaluates");

    assert_eq!(matches, vec![SchemeId(1), SchemeId(4)]);
    assert!(lookup.has_results());
    let results = lookup.results().expect("results are open");
    assert_eq!(ids(&results), vec![1, 4]);
}

#[test]
fn incomplete_form_stays_open_and_reports_missing_fields() {
    let mut lookup = SchemeLookup::new(shared_catalog());
    lookup.open_form().expect("opens");
    lookup
        .select(Dimension::StartupStage, "Ideation")
        .expect("form is open");
    lookup
        .select(Dimension::IndustryType, "   ")
        .expect("form is open");

    let err = lookup.submit().expect_err("five fields are still blank");

    match err {
        LookupError::Form(FormError::Incomplete { missing }) => {
            assert_eq!(missing.len(), 5);
            assert_eq!(missing[0], Dimension::IndustryType);
        }
        other => panic!("expected incomplete form, got {other:?}"),
    }
    assert_eq!(lookup.state(), &LookupState::FormOpen);
    assert!(!lookup.has_results());
}

#[test]
fn empty_match_set_is_distinct_from_not_submitted() {
    let mut lookup = SchemeLookup::new(shared_catalog());
    lookup.open_form().expect("opens");
    for dimension in Dimension::ordered() {
        lookup
            .select(dimension, "Something else entirely")
            .expect("form is open");
    }

    let matches = lookup.submit().expect("unlisted values still evaluate");

    assert!(matches.is_empty());
    assert!(lookup.has_results());
    assert_eq!(lookup.results().map(|results| results.len()), Some(0));
    assert_eq!(
        lookup.state(),
        &LookupState::ResultsOpen {
            matches: Vec::new()
        }
    );
}

#[test]
fn revise_returns_to_the_filled_form() {
    let mut lookup = SchemeLookup::new(shared_catalog());
    lookup.open_form().expect("opens");
    fill(&mut lookup, &seed_stage_form());
    lookup.submit().expect("evaluates");

    lookup.revise().expect("results can be revised");
    assert_eq!(lookup.state(), &LookupState::FormOpen);
    assert_eq!(lookup.form(), &seed_stage_form());

    lookup
        .select(Dimension::StartupStage, "Established")
        .expect("form is open");
    let matches = lookup.submit().expect("evaluates again");
    assert!(!matches.contains(&SchemeId(4)));
}

#[test]
fn invalid_transitions_are_rejected() {
    let mut lookup = SchemeLookup::new(shared_catalog());

    assert!(matches!(
        lookup.submit(),
        Err(LookupError::InvalidTransition {
            state: "browsing",
            ..
        })
    ));
    assert!(lookup.revise().is_err());
    assert!(lookup.select(Dimension::Employees, "1-5").is_err());

    lookup.open_form().expect("opens");
    fill(&mut lookup, &seed_stage_form());
    lookup.submit().expect("evaluates");
    let err = lookup.open_form().expect_err("results must be revised or closed");
    assert_eq!(err.to_string(), "cannot open the form while results_open");
}

#[test]
fn close_keeps_the_draft_until_reset() {
    let mut lookup = SchemeLookup::new(shared_catalog());
    lookup.open_form().expect("opens");
    lookup
        .select(Dimension::Employees, "1-5")
        .expect("form is open");

    lookup.close();
    assert_eq!(lookup.state(), &LookupState::Browsing);
    assert_eq!(lookup.form().value(Dimension::Employees), Some("1-5"));

    lookup.reset_form();
    assert_eq!(lookup.form(), &EligibilityForm::default());
}

#[test]
fn filters_apply_in_every_state() {
    let mut lookup = SchemeLookup::new(shared_catalog());
    lookup.set_category(Some(SchemeCategory::Msme));
    assert_eq!(ids(&lookup.visible_schemes()), vec![2, 5, 6, 7]);

    lookup.open_form().expect("opens");
    lookup.set_search("credit");
    assert_eq!(ids(&lookup.visible_schemes()), vec![2, 6, 7]);

    lookup.set_category(None);
    lookup.set_search("");
    assert_eq!(lookup.visible_schemes().len(), 8);
}

#[test]
fn form_accepts_short_employee_labels() {
    let mut form = seed_stage_form();
    form.set(Dimension::Employees, "1-5");
    let profile = form.to_profile().expect("complete");
    assert_eq!(profile, seed_stage_profile());
}
