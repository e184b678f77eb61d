use assert_cmd::Command;
use predicates::prelude::*;

fn explorateur(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("explorateur").unwrap();
    cmd.current_dir(dir.path()).env_remove("GEMINI_API_KEY");
    cmd
}

#[test]
fn test_schema_lists_config_fields() {
    let dir = tempfile::tempdir().unwrap();
    explorateur(&dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("excluded_domains"))
        .stdout(predicate::str::contains("api_key_env"));
}

#[test]
fn test_research_rejects_blank_subject() {
    let dir = tempfile::tempdir().unwrap();
    explorateur(&dir)
        .args(["research", "--subject", "   ", "--aspect", "Habitat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Subject must not be empty"));
}

#[test]
fn test_research_rejects_missing_aspects() {
    let dir = tempfile::tempdir().unwrap();
    explorateur(&dir)
        .args(["research", "--subject", "Les abeilles", "--aspect", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("At least one non-empty aspect"));
}

#[test]
fn test_research_requires_api_key() {
    let dir = tempfile::tempdir().unwrap();
    explorateur(&dir)
        .args(["research", "--subject", "Les abeilles", "--aspect", "Habitat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn test_unknown_mode_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    explorateur(&dir)
        .args([
            "research",
            "--subject",
            "Les abeilles",
            "--aspect",
            "Habitat",
            "--mode",
            "medium",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown result mode"));
}

#[test]
fn test_brainstorm_rejects_blank_subject() {
    let dir = tempfile::tempdir().unwrap();
    explorateur(&dir)
        .args(["brainstorm", "--subject", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Subject must not be empty"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("explorateur.yaml"),
        "provider:\n  timeout_sec: 0\n",
    )
    .unwrap();

    explorateur(&dir)
        .args(["brainstorm", "--subject", "Les volcans"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("provider.timeout_sec"));
}
