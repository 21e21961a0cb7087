//! CLI command integration tests.
//! Each test clears LIN_CONFIG so a developer's settings file never leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lin_cmd() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("lin").unwrap();
    cmd.env_remove("LIN_CONFIG");
    cmd
}

#[test]
fn render_defaults() {
    lin_cmd()
        .args(["render", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Friend, let’s count the good things still coming.",
        ))
        .stdout(predicate::str::contains("About 81 more years"));
}

#[test]
fn render_thirty_year_old_male() {
    lin_cmd()
        .args([
            "render", "--seed", "1", "--name", "Omar", "--age", "30", "--gender", "male",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Omar, "))
        .stdout(predicate::str::contains("17,885 sunrises still ahead"));
}

#[test]
fn render_fixed_horizon() {
    lin_cmd()
        .args(["render", "--seed", "1", "--no-smart", "--age", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("next ten years"))
        .stdout(predicate::str::contains("1,040 weekend mornings"));
}

#[test]
fn render_gentle_has_no_exclamations() {
    lin_cmd()
        .args([
            "render",
            "--seed",
            "3",
            "--tone",
            "gentle",
            "--quarterly",
            "Surfing",
            "--pet-type",
            "dog",
            "--pet-name",
            "Rex",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("surfing seasons"))
        .stdout(predicate::str::contains("Rex"))
        .stdout(predicate::str::contains("!").not());
}

#[test]
fn render_same_seed_same_output() {
    let run = || {
        lin_cmd()
            .args(["render", "--seed", "77", "--name", "Ivy"])
            .output()
            .unwrap()
    };
    let a = run();
    let b = run();
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn render_plain_export_uses_blank_lines() {
    let output = lin_cmd()
        .args(["render", "--seed", "1", "--plain"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let blocks: Vec<&str> = stdout.trim_end().split("\n\n").collect();
    assert_eq!(blocks.len(), 8);
}

#[test]
fn render_json() {
    let output = lin_cmd()
        .args(["render", "--seed", "1", "--json", "--age", "30", "--gender", "male"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["estimate"]["expected_lifespan_years"], 79);
    assert_eq!(value["counts"]["days"], 17885);
    assert_eq!(value["lines"].as_array().unwrap().len(), 8);
}

#[test]
fn render_from_profile_file_with_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("me.toml");
    std::fs::write(
        &path,
        r#"
name = "Mara"
age = 40
location = "Galway"

[hobbies]
weekly = "Running"
"#,
    )
    .unwrap();

    lin_cmd()
        .args(["render", "--seed", "1", "--profile"])
        .arg(&path)
        .args(["--name", "Maura"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maura, "))
        .stdout(predicate::str::contains("tiny running moments"))
        .stdout(predicate::str::contains("Plenty of Galway days"));
}

#[test]
fn render_with_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("lin.toml");
    std::fs::write(
        &config,
        "random_closing = false\ngroup_thousands = false\n",
    )
    .unwrap();

    lin_cmd()
        .args(["render", "--age", "30", "--gender", "male", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("17885 sunrises"))
        .stdout(predicate::str::contains("more proof you’re allowed to take your time."));
}

#[test]
fn config_from_env() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("lin.toml");
    std::fs::write(&config, "group_thousands = false\n").unwrap();

    lin_cmd()
        .env("LIN_CONFIG", &config)
        .args(["render", "--seed", "1", "--no-smart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1040 weekend mornings"));
}

#[test]
fn estimate_output() {
    lin_cmd()
        .args([
            "estimate",
            "--age",
            "90",
            "--gender",
            "female",
            "--smoking",
            "current",
            "--drinking",
            "heavy",
            "--conditions",
            "diabetes, asthma",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("expected:   66"))
        .stdout(predicate::str::contains("remaining:  0"))
        .stdout(predicate::str::contains("mode:       smart"));
}

#[test]
fn estimate_lenient_age() {
    lin_cmd()
        .args(["estimate", "--age", "3a0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("age:        30"));
}

#[test]
fn missing_profile_file_fails() {
    let dir = TempDir::new().unwrap();
    lin_cmd()
        .args(["render", "--profile"])
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load profile"));
}

#[test]
fn unsupported_profile_format_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("me.yaml");
    std::fs::write(&path, "name: x").unwrap();
    lin_cmd()
        .args(["render", "--profile"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported profile format"));
}

#[test]
fn hobby_list_and_slots_conflict() {
    lin_cmd()
        .args(["render", "--hobby", "Chess", "--monthly", "Pottery"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn repeated_hobby_flags_are_weekly() {
    lin_cmd()
        .args([
            "render", "--seed", "1", "--no-smart", "--hobby", "Chess", "--hobby", "Baking",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("520 tiny chess moments"))
        .stdout(predicate::str::contains("520 tiny baking moments"));
}
