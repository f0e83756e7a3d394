//! End-to-end tests for config loading and evaluation through the library
//! surface.

use creditx::config::load_config_from_path;
use creditx::{BureauScores, Error, Evaluation, LoanType, ProfileSet, ScoreRating};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn config_file_override_changes_the_blend() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".creditx.toml");
    fs::write(
        &path,
        r#"
[profiles.personal]
cibil = 0.25
crif = 0.25
equifax = 0.25
experian = 0.25
"#,
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    let profiles = config.to_profile_set();
    let scores = BureauScores::new(765.0, 760.0, 754.0, 742.0);

    // Equal weights: plain average instead of the CIBIL-heavy built-in.
    let blended = profiles.blend(&scores, LoanType::Personal);
    assert!((blended - 755.25).abs() < 1e-9, "got {}", blended);

    // Built-in profile still applies to loan types without an override.
    let business = profiles.blend(&scores, LoanType::Business);
    assert!((business - 758.5).abs() < 1e-9, "got {}", business);
}

#[test]
fn invalid_override_in_file_keeps_builtin_behavior() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".creditx.toml");
    fs::write(
        &path,
        r#"
[profiles.personal]
cibil = 2.0
crif = 0.2
equifax = 0.2
experian = 0.1
"#,
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    let profiles = config.to_profile_set();
    let scores = BureauScores::new(765.0, 760.0, 754.0, 742.0);
    let blended = profiles.blend(&scores, LoanType::Personal);
    assert!((blended - 759.5).abs() < 1e-9, "got {}", blended);
}

#[test]
fn evaluation_serializes_with_stable_field_names() {
    let evaluation = Evaluation::compute(
        &ProfileSet::builtin(),
        BureauScores::new(700.0, 700.0, 700.0, 700.0),
        LoanType::Education,
    );
    assert!((evaluation.blended_score - 700.0).abs() < 1e-9);
    assert_eq!(evaluation.rating, ScoreRating::Good);

    let json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&evaluation).unwrap()).unwrap();
    assert_eq!(json["loan_type"], "education");
    assert_eq!(json["scores"]["cibil"], 700.0);
    assert_eq!(json["weights"]["experian"], 0.15);
    assert_eq!(json["rating"], "good");
    assert!(json["timestamp"].is_string());
}

#[test]
fn unsupported_loan_type_tag_surfaces_invalid_loan_type() {
    let err = "mortgage".parse::<LoanType>().unwrap_err();
    assert!(matches!(err, Error::InvalidLoanType { .. }));
    assert_eq!(err.exit_code(), 2);
}
