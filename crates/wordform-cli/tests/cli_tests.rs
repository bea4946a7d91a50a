//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command running in an isolated directory with no user config in reach.
fn wordform(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("wordform").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("WORDFORM_PAGE_SIZE")
        .env_remove("WORDFORM_CATALOG");
    cmd
}

const PAGE_ONE_ANSWERS: [&str; 10] = [
    "running",
    "action",
    "creation",
    "decision",
    "education",
    "success",
    "beauty",
    "employment",
    "invention",
    "competition",
];

const SMALL_CATALOG: &str = r#"[catalog]
name = "Small"

[[words]]
word = "go"
verb = ["go", "goes"]
noun_thing = "going"

[[words]]
word = "run"
verb = "run"
noun_thing = ["run", "running"]
"#;

#[test]
fn pages_builtin_catalog() {
    let dir = TempDir::new().unwrap();
    wordform(&dir)
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::contains("English Word Forms: 42 words, 5 page(s) of up to 10"))
        .stdout(predicate::str::contains("compete"));
}

#[test]
fn pages_respects_env_page_size() {
    let dir = TempDir::new().unwrap();
    wordform(&dir)
        .env("WORDFORM_PAGE_SIZE", "20")
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 page(s) of up to 20"));
}

#[test]
fn show_first_page() {
    let dir = TempDir::new().unwrap();
    wordform(&dir)
        .args(["show", "--page", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 - Test Your Knowledge"))
        .stdout(predicate::str::contains(
            "1. What is the Thing Noun of \"run\" (Verb)?",
        ))
        .stdout(predicate::str::contains(
            "6. What is the Thing Noun of \"succeed\" (Verb)?",
        ));
}

#[test]
fn show_past_last_page() {
    let dir = TempDir::new().unwrap();
    wordform(&dir)
        .args(["show", "--page", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No more words"));
}

#[test]
fn check_perfect_page() {
    let dir = TempDir::new().unwrap();
    let mut cmd = wordform(&dir);
    cmd.args(["check", "--page", "1", "--fail-on-wrong"]);
    for answer in PAGE_ONE_ANSWERS {
        cmd.arg("--answer").arg(answer.to_uppercase());
    }
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("You scored 10 out of 10!"))
        .stdout(predicate::str::contains("Correct answer").not());
}

#[test]
fn check_reports_wrong_answers() {
    let dir = TempDir::new().unwrap();
    wordform(&dir)
        .args(["check", "--page", "1", "--answer", "runs", "--answer", " Action "])
        .assert()
        .success()
        .stdout(predicate::str::contains("You scored 1 out of 10!"))
        .stdout(predicate::str::contains("Correct answer: run / running"))
        .stdout(predicate::str::contains("(no answer)"));
}

#[test]
fn check_fail_on_wrong_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    wordform(&dir)
        .args(["check", "--page", "5", "--answer", "writing", "--fail-on-wrong"])
        .assert()
        .failure();
}

#[test]
fn check_json_output() {
    let dir = TempDir::new().unwrap();
    let output = wordform(&dir)
        .args(["check", "--page", "5", "--format", "json"])
        .args(["--answer", "writing", "--answer", "peaceful"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["score"], 2);
    assert_eq!(json["total"], 2);
    assert_eq!(json["page"], 5);
    assert_eq!(json["results"][1]["question"]["target_form"], "adjective");
}

#[test]
fn check_too_many_answers() {
    let dir = TempDir::new().unwrap();
    wordform(&dir)
        .args(["check", "--page", "5"])
        .args(["--answer", "a", "--answer", "b", "--answer", "c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("got 3 answers but page 5 has 2"));
}

#[test]
fn check_with_custom_catalog_and_rotating_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("small.toml"), SMALL_CATALOG).unwrap();
    std::fs::write(
        dir.path().join("wordform.toml"),
        "catalog = \"small.toml\"\nselection = \"rotating\"\n",
    )
    .unwrap();

    wordform(&dir)
        .args(["check", "--page", "1", "--round", "1"])
        .args(["--answer", "GOES", "--answer", "run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("What is the Verb of \"going\"?"))
        .stdout(predicate::str::contains("You scored 2 out of 2!"));
}

#[test]
fn check_selection_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("small.toml"), SMALL_CATALOG).unwrap();

    wordform(&dir)
        .args(["--selection", "rotating", "check", "--catalog", "small.toml"])
        .args(["--page", "1", "--round", "1", "--answer", "go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("What is the Verb of \"going\"?"))
        .stdout(predicate::str::contains("You scored 1 out of 2!"));
}

#[test]
fn unknown_selection_policy_is_rejected() {
    let dir = TempDir::new().unwrap();
    wordform(&dir)
        .args(["show", "--page", "1", "--selection", "random"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown selection policy: random"));
}

#[test]
fn check_unknown_format_is_rejected() {
    let dir = TempDir::new().unwrap();
    wordform(&dir)
        .args(["check", "--page", "1", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format: yaml"));
}

#[test]
fn global_config_catalog_is_relative_to_config_dir() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join(".config").join("wordform");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("small.toml"), SMALL_CATALOG).unwrap();
    std::fs::write(config_dir.join("config.toml"), "catalog = \"small.toml\"\n").unwrap();

    wordform(&dir)
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::contains("Small: 2 words, 1 page(s) of up to 10"));
}

#[test]
fn quiz_interactive_session() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("small.toml"), SMALL_CATALOG).unwrap();

    wordform(&dir)
        .args(["quiz", "--catalog", "small.toml"])
        .write_stdin("going\nruns\nr\ngoing\nRUNNING\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You scored 1 out of 2!"))
        .stdout(predicate::str::contains("Correct answer: run / running"))
        .stdout(predicate::str::contains("You scored 2 out of 2!"))
        .stdout(predicate::str::contains("Your answer: RUNNING"));
}

#[test]
fn quiz_missing_config_file() {
    let dir = TempDir::new().unwrap();
    wordform(&dir)
        .args(["--config", "nope.toml", "quiz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn validate_valid_catalog() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("small.toml"), SMALL_CATALOG).unwrap();

    wordform(&dir)
        .args(["validate", "--catalog", "small.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog: Small (2 words)"))
        .stdout(predicate::str::contains("Catalog valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let catalog = format!("{SMALL_CATALOG}\n[[words]]\nword = \"go\"\nverb = \"go\"\nnoun_person = \"goer\"\n");
    std::fs::write(dir.path().join("dupes.toml"), catalog).unwrap();

    wordform(&dir)
        .args(["validate", "--catalog", "dupes.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[go] WARNING: duplicate word: go"))
        .stdout(predicate::str::contains("1 warning(s) found."));
}

#[test]
fn validate_rejects_single_form_word() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("bad.toml"),
        "[[words]]\nword = \"alone\"\nadjective = \"alone\"\n",
    )
    .unwrap();

    wordform(&dir)
        .args(["validate", "--catalog", "bad.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("at least 2 are required"));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    wordform(&dir)
        .args(["validate", "--catalog", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    wordform(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created wordform.toml"))
        .stdout(predicate::str::contains("Created words.toml"));

    assert!(dir.path().join("wordform.toml").exists());
    assert!(dir.path().join("words.toml").exists());

    // The starter files work together
    wordform(&dir)
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::contains("My Word Forms: 3 words, 1 page(s)"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    wordform(&dir).arg("init").assert().success();

    // Second init should skip
    wordform(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    wordform(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("English word-form vocabulary trainer"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    wordform(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wordform"));
}
