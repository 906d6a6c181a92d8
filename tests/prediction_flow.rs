use alchemia::prediction::{PromptTemplate, ASPIRIN_EXAMPLE_JSON, ASPIRIN_SMILES};
use alchemia::session::{render_view, ResultView, NOT_AVAILABLE};
use alchemia::{MockLLMClient, PredictionClient, PredictionError, SessionController};
use std::sync::Arc;

fn session(mock: &MockLLMClient) -> SessionController<MockLLMClient> {
    SessionController::new(PredictionClient::new(
        Arc::new(mock.clone()),
        PromptTemplate::default(),
    ))
}

fn rendered(session: &SessionController<MockLLMClient>) -> String {
    let mut out = Vec::new();
    render_view(&ResultView::select(session.state()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn value_of<'a>(text: &'a str, label: &str) -> &'a str {
    text.lines()
        .find(|line| line.starts_with(label))
        .map(|line| line[label.len()..].trim())
        .unwrap_or_else(|| panic!("no line for {label} in:\n{text}"))
}

#[test]
fn aspirin_scenario_renders_expected_values() {
    let mock = MockLLMClient::default();
    mock.push_response(ASPIRIN_EXAMPLE_JSON);
    let mut session = session(&mock);
    session.set_text(ASPIRIN_SMILES);
    session.submit().unwrap();

    let text = rendered(&session);
    assert_eq!(value_of(&text, "Molecular Formula"), "C9H8O4");
    assert_eq!(value_of(&text, "Molecular Weight"), "180.158 g/mol");
    assert_eq!(value_of(&text, "H-Bond Donors"), "1");
    assert_eq!(value_of(&text, "H-Bond Acceptors"), "3");
    assert_eq!(value_of(&text, "Polar Surface Area"), "63.6 Å²");
}

#[test]
fn credential_failure_surfaces_distinct_message() {
    let mock = MockLLMClient::default();
    mock.push_failure("Gemini returned 400 Bad Request: API key not valid. Please pass a valid API key.");
    let mut session = session(&mock);
    session.set_text("CCO");

    assert_eq!(session.submit().unwrap_err(), PredictionError::Credential);
    let text = rendered(&session);
    assert_eq!(
        text.trim(),
        "Error: Invalid or missing API Key. Please ensure it is correctly configured in the environment."
    );
    assert!(session.state().record().is_none());
}

#[test]
fn null_fields_render_as_not_available_only() {
    let mock = MockLLMClient::default();
    mock.push_response(
        r#"Here is the prediction:
        {"molecularWeight": 46.069, "logP": null, "hydrogenBondDonors": 1,
         "hydrogenBondAcceptors": 1, "polarSurfaceArea": null, "rotatableBonds": 0,
         "canonicalSmiles": "CCO", "formula": "C2H6O", "formalCharge": null}
        Let me know if you need anything else."#,
    );
    let mut session = session(&mock);
    session.set_text("OCC");
    let record = session.submit().unwrap().clone();
    assert_eq!(record.log_p, None);
    assert_eq!(record.polar_surface_area, None);
    assert_eq!(record.rotatable_bonds, Some(0));

    let text = rendered(&session);
    assert_eq!(value_of(&text, "LogP"), NOT_AVAILABLE);
    assert_eq!(value_of(&text, "Polar Surface Area"), NOT_AVAILABLE);
    assert_eq!(value_of(&text, "Formal Charge"), NOT_AVAILABLE);
    assert_eq!(value_of(&text, "Rotatable Bonds"), "0");
    assert_eq!(value_of(&text, "Canonical SMILES"), "CCO");
}

#[test]
fn consecutive_predictions_replace_the_record() {
    let mock = MockLLMClient::default();
    mock.push_response(ASPIRIN_EXAMPLE_JSON);
    mock.push_response(r#"{"formula": "C9H8O4"}"#);
    let mut session = session(&mock);
    session.set_text(ASPIRIN_SMILES);

    assert_eq!(session.submit().unwrap().molecular_weight, Some(180.158));
    let second = session.submit().unwrap();
    assert_eq!(second.formula.as_deref(), Some("C9H8O4"));
    assert_eq!(second.molecular_weight, None);
    assert_eq!(second.hydrogen_bond_donors, None);
    assert_eq!(mock.calls(), 2);
}

#[test]
fn failure_after_success_leaves_ready_with_one_message() {
    let mock = MockLLMClient::default();
    mock.push_response(ASPIRIN_EXAMPLE_JSON);
    mock.push_response("The model has no opinion.");
    let mut session = session(&mock);
    session.set_text(ASPIRIN_SMILES);
    session.submit().unwrap();

    assert_eq!(session.submit().unwrap_err(), PredictionError::Extraction);
    assert!(session.state().record().is_none());
    assert_eq!(
        rendered(&session).trim(),
        "Error: AI response was not a valid JSON object. Please check the SMILES string or try again."
    );
    assert!(!session.state().is_loading());
}

#[test]
fn file_content_becomes_the_input() {
    let mock = MockLLMClient::default();
    mock.push_response(ASPIRIN_EXAMPLE_JSON);
    let mut session = session(&mock);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aspirin.smi");
    std::fs::write(&path, format!("  {}\n", ASPIRIN_SMILES)).unwrap();

    session.load_file(&path).unwrap();
    assert_eq!(session.state().text(), ASPIRIN_SMILES);
    session.submit().unwrap();
    assert!(mock.requests()[0].prompt.contains(ASPIRIN_SMILES));
}
