#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const STRONG_RESUME: &str = r#"{
    "text": "Jane Doe\njane@example.com | +1 555 123 4567 | linkedin.com/in/jane | github.com/jane\nEducation\nPhD Computer Science, Stanford\nExperience\nSenior engineer at Google 2018 - present. Led and scaled Rust services, improved latency 40%, built APIs for 2000 users.\nProjects\nProject: rust search engine, deployed to production, 300 stars",
    "sections": {
        "education": "PhD Computer Science, Stanford",
        "experience": "Senior engineer at Google 2018 - present",
        "skills": "Rust, Go, Python",
        "projects": "Project: rust search engine"
    },
    "skills": ["Rust", "Go", "Python", "rust"],
    "contact": {"email": "jane@example.com", "phone": "+1 555 123 4567"}
}"#;

fn scorer_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ats-scorer").expect("binary should compile");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, content: &str) {
    if let Some(parent) = dir.join(name).parent() {
        fs::create_dir_all(parent).expect("parent dir should create");
    }
    fs::write(dir.join(name), content).expect("file should write");
}

#[test]
fn empty_resume_scores_zero_and_lists_missing_sections() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "empty.json", r#"{"text": ""}"#);

    scorer_in(dir.path())
        .args(["score", "empty.json", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"atsScore\": 0.0"))
        .stdout(predicate::str::contains("Missing or undetected Education section"))
        .stdout(predicate::str::contains("Missing or undetected Experience section"))
        .stdout(predicate::str::contains("Missing Projects section"))
        .stdout(predicate::str::contains("\"similarityMethod\": \"TF-IDF\""));
}

#[test]
fn strong_resume_renders_markdown_breakdown() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "jane.json", STRONG_RESUME);

    scorer_in(dir.path())
        .args(["score", "jane.json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# ATS Score Report"))
        .stdout(predicate::str::contains("- education: 9.5"))
        .stdout(predicate::str::contains("- parsingPenalty: 0"))
        .stdout(predicate::str::contains("- scalingFactor: 0.98"))
        .stdout(predicate::str::contains("Email found: jane@example.com"))
        .stdout(predicate::str::contains("Rust, Go, Python\n"));
}

#[test]
fn job_description_file_enables_relevance() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "jane.json", STRONG_RESUME);
    write(
        dir.path(),
        "jd.txt",
        "We are hiring a senior Rust engineer to build search services and APIs.",
    );

    scorer_in(dir.path())
        .args(["score", "jane.json", "--job-description", "jd.txt", "-f", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Relevance (TF-IDF) = 0."))
        .stdout(predicate::str::contains("\"scalingFactor\": 0.98"));
}

#[test]
fn parsing_errors_warn_and_penalize() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(
        dir.path(),
        "scan.json",
        r#"{"text": "education", "parsing_errors": ["image only page", "table", "font"]}"#,
    );

    scorer_in(dir.path())
        .args(["score", "scan.json", "-f", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"parsingPenalty\": -10"))
        .stdout(predicate::str::contains(
            "Parsing issues detected: image only page; table; font",
        ));
}

#[test]
fn min_score_blocks_low_scores() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "empty.json", r#"{"text": ""}"#);

    scorer_in(dir.path())
        .args(["score", "empty.json", "--min-score", "50"])
        .assert()
        .code(2);
}

#[test]
fn malformed_request_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "bad.json", "{not json");

    scorer_in(dir.path())
        .args(["score", "bad.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid scoring request"));
}

#[test]
fn batch_scores_every_request_in_path_order() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "resumes/b.json", STRONG_RESUME);
    write(dir.path(), "resumes/nested/a.json", r#"{"text": ""}"#);
    write(dir.path(), "resumes/notes.txt", "ignored");

    let output = scorer_in(dir.path())
        .args(["batch", "resumes", "-f", "json"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("stdout should be utf-8");

    assert_eq!(stdout.matches("\"atsScore\"").count(), 2);
    let b = stdout.find("b.json").expect("b.json should be reported");
    let a = stdout.find("a.json").expect("a.json should be reported");
    assert!(b < a, "reports should follow path order");
}

#[test]
fn config_file_selects_format_and_extensions() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(
        dir.path(),
        "ats.toml",
        "[report]\nformat = \"json\"\n\n[batch]\nextensions = [\"resume\"]\n",
    );
    write(dir.path(), "in/one.resume", r#"{"text": ""}"#);
    write(dir.path(), "in/two.json", r#"{"text": ""}"#);

    scorer_in(dir.path())
        .args(["batch", "in"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("one.resume"))
        .stdout(predicate::str::contains("two.json").not())
        .stdout(predicate::str::contains("\"atsScore\""));
}

#[test]
fn invalid_config_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "ats.toml", "[report]\nformat = \"sarif\"\n");
    write(dir.path(), "empty.json", r#"{"text": ""}"#);

    scorer_in(dir.path())
        .args(["score", "empty.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config parse error"));
}

#[test]
fn similarity_reports_method_and_lengths() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "resume.txt", "Rust developer");
    write(dir.path(), "jd.txt", "Rust developer");

    scorer_in(dir.path())
        .args(["similarity", "resume.txt", "jd.txt"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"method\": \"TF-IDF\""))
        .stdout(predicate::str::contains("\"resume_length\": 14"))
        .stdout(predicate::str::contains("\"jd_length\": 14"));
}

#[test]
fn embedding_similarity_can_be_enabled_by_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(dir.path(), "ats.toml", "[relevance]\nembedding_enabled = true\n");
    write(dir.path(), "resume.txt", "Rust developer");
    write(dir.path(), "jd.txt", "rust developer!");

    scorer_in(dir.path())
        .args(["similarity", "resume.txt", "jd.txt"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"method\": \"embedding\""));
}
