//! Scenario files read from disk, compared and rendered.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tempfile::{Builder, NamedTempFile};

use choice_compare::adapters::{
    FileScenarioReader, JsonReportRenderer, SequentialIdGenerator, TextReportRenderer,
};
use choice_compare::application::{EditDecisionHandler, LoadScenarioCommand, LoadScenarioHandler};
use choice_compare::domain::analysis::{DeltaFilter, Side};
use choice_compare::domain::foundation::ErrorCode;
use choice_compare::ports::{ReportRenderer, ScenarioError};

const COFFEE_YAML: &str = r#"
context: "Cafe coffee or home brew?"
filter: significant
options:
  - key: cafe
    title: Cafe
    impacts:
      - { dimension: money, value: -25, text: "Daily latte" }
      - { dimension: peace, value: "3" }
  - key: home
    title: Home
    impacts:
      - { dimension: money, value: -5 }
      - { dimension: time, value: 10.5 }
      - { dimension: peace, value: "" }
constraints:
  - text: "Under budget"
    checks: { cafe: false, home: true }
  - text: "No commute"
    type: hard
    checks: { home: ~ }
"#;

fn write_scenario(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn handler(default_soft_penalty: f64) -> LoadScenarioHandler {
    let editor = EditDecisionHandler::new(Arc::new(SequentialIdGenerator::new()))
        .with_default_soft_penalty(default_soft_penalty);
    LoadScenarioHandler::new(Arc::new(FileScenarioReader::new()), editor)
}

fn load(path: &Path) -> Result<choice_compare::application::LoadScenarioResult, ScenarioError> {
    handler(-10.0).handle(LoadScenarioCommand {
        path: path.to_path_buf(),
    })
}

#[test]
fn yaml_scenario_is_compared() {
    let file = write_scenario(".yaml", COFFEE_YAML);
    let loaded = load(file.path()).unwrap();

    assert_eq!(loaded.session.filter_mode(), DeltaFilter::Significant);

    let summary = loaded.overview.comparison.unwrap();
    let result = &summary.result;
    assert_eq!(result.score(Side::A).impact_total, -22.0);
    assert_eq!(result.score(Side::A).constraint_penalty, -10.0);
    assert_eq!(result.score(Side::A).total, -32.0);
    assert_eq!(result.score(Side::B).total, 5.5);
    assert!(!result.a.is_disqualified);
    assert!(!result.b.is_disqualified);

    // money +20, time +10.5, peace -3: only the first two exceed the threshold
    assert_eq!(summary.filtered_deltas.len(), 2);
    assert_eq!(summary.verdict_text, "Home leads by 37.5 points");
}

#[test]
fn json_scenario_matches_yaml() {
    let json = r#"{
        "options": [
            {"title": "Cafe", "impacts": [{"dimension": "money", "value": -25}]},
            {"title": "Home", "impacts": [{"dimension": "money", "value": -5}, {"dimension": "time", "value": 10}]}
        ],
        "constraints": [{"type": "hard", "checks": {"1": false}}]
    }"#;
    let file = write_scenario(".json", json);
    let loaded = load(file.path()).unwrap();

    let result = loaded.overview.comparison.unwrap().result;
    assert!(result.a.is_disqualified);
    assert_eq!(result.a.violations[0].penalty, 0.0);
    assert_eq!(result.b.total, 5.0);
}

#[test]
fn configured_default_penalty_applies_to_constraints_without_one() {
    let file = write_scenario(".yaml", COFFEE_YAML);
    let loaded = handler(-4.0)
        .handle(LoadScenarioCommand {
            path: file.path().to_path_buf(),
        })
        .unwrap();

    let result = loaded.overview.comparison.unwrap().result;
    assert_eq!(result.a.constraint_penalty, -4.0);
}

#[test]
fn fractional_values_in_file_are_not_rounded() {
    let file = write_scenario(
        ".yaml",
        "options:\n  - impacts: [{ dimension: money, value: 0 }]\n  - impacts: [{ dimension: money, value: 3.4 }]\n",
    );
    let result = load(file.path()).unwrap().overview.comparison.unwrap().result;

    assert_eq!(result.b.total, 3.4);
    assert!(!result.is_close_call);
}

#[test]
fn written_key_clashing_with_default_key_is_explained() {
    let file = write_scenario(".yaml", "options:\n  - key: '2'\n  - {}\n");
    let err = load(file.path()).unwrap_err();

    assert_eq!(err.code(), ErrorCode::InvalidFormat);
    assert!(err.to_string().contains("default key of option 2"));
}

#[test]
fn unknown_dimension_in_file_is_rejected() {
    let file = write_scenario(
        ".yaml",
        "options:\n  - impacts: [{ dimension: karma, value: 1 }]\n  - {}\n",
    );
    let err = load(file.path()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownDimension);
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(&dir.path().join("nothing.yaml")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ScenarioUnreadable);
}

#[test]
fn renders_text_and_json_reports() {
    let file = write_scenario(".yaml", COFFEE_YAML);
    let overview = load(file.path()).unwrap().overview;

    let text = TextReportRenderer::new().render(&overview).unwrap();
    assert!(text.contains("Decision: Cafe coffee or home brew?"));
    assert!(text.contains("Home leads by 37.5 points"));
    assert!(text.contains("Biggest differences (significant):"));

    let json = JsonReportRenderer::new().render(&overview).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["comparison"]["result"]["b"]["total"], 5.5);
    assert_eq!(value["comparison"]["verdict"]["kind"], "leads");
    assert_eq!(value["comparison"]["verdict"]["side"], "b");
}

#[test]
fn single_option_file_renders_not_comparable() {
    let file = write_scenario(".yml", "options:\n  - title: Only\n");
    let overview = load(file.path()).unwrap().overview;

    assert!(overview.comparison.is_none());
    let text = TextReportRenderer::new().render(&overview).unwrap();
    assert!(text.contains("Not comparable yet"));
}
