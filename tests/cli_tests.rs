use regex::Regex;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    answers_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let answers_path = dir.path().join("answers.json");
        fs::write(
            &answers_path,
            r#"{
                "age": "31-35",
                "education": "master",
                "occupation": "engineer",
                "wealth": "300m-500m",
                "marital": "married",
                "housing": "metro-apt",
                "vehicle": "domestic-mid",
                "hobbies": "travel",
                "social": "alumni",
                "certifications": "tech-advanced"
            }"#,
        )
        .unwrap();

        Self { dir, answers_path }
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lifegrade"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

// education 90, occupation 90, wealth 75, marital 100, housing 90,
// vehicle 70, hobbies 90, social 75, certifications 80
// => 90.25
#[test]
fn test_score_table_output() {
    let ctx = TestContext::new();
    let out = run(&["score", "--answers", ctx.answers_path.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let re = Regex::new(r"Grade: (\w)\s+Total: (\d+)\s+Percentile: (\d+)").unwrap();
    let text = stdout(&out);
    let caps = re.captures(&text).expect("summary line missing");
    assert_eq!(&caps[1], "A");
    assert_eq!(&caps[2], "90");
    assert_eq!(&caps[3], "85");
}

#[test]
fn test_score_json_output() {
    let ctx = TestContext::new();
    let out = run(&[
        "score",
        "--answers",
        ctx.answers_path.to_str().unwrap(),
        "--json",
    ]);
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["result"]["totalScore"], 90);
    assert_eq!(json["result"]["grade"], "A");
    assert_eq!(json["position"], 90);
}

#[test]
fn test_cli_distribution_override() {
    let ctx = TestContext::new();
    let out = run(&[
        "score",
        "--answers",
        ctx.answers_path.to_str().unwrap(),
        "--json",
        "--mean",
        "90.25",
    ]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["result"]["percentile"], 50);
}

#[test]
fn test_config_file_is_applied() {
    let ctx = TestContext::new();
    let config_path = ctx.dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{ "distribution": { "mean": 50.0, "std_dev": 20.0 } }"#,
    )
    .unwrap();

    let out = run(&[
        "score",
        "--answers",
        ctx.answers_path.to_str().unwrap(),
        "--json",
        "--config",
        config_path.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    // z = (90.25 - 50) / 20 = 2.01
    assert_eq!(json["result"]["percentile"], 98);
}

#[test]
fn test_invalid_std_dev_fails() {
    let ctx = TestContext::new();
    let out = run(&[
        "score",
        "--answers",
        ctx.answers_path.to_str().unwrap(),
        "--std-dev",
        "0",
    ]);
    assert!(!out.status.success());
}

#[test]
fn test_incomplete_answers_fail() {
    let ctx = TestContext::new();
    let path = ctx.dir.path().join("partial.json");
    fs::write(&path, r#"{ "education": "phd" }"#).unwrap();

    let out = run(&["score", "--answers", path.to_str().unwrap()]);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("Missing answer for metric 'age'"), "{}", err);
}

#[test]
fn test_options_listing() {
    let out = run(&["options", "--metric", "housing"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("seoul-apt"));
    assert!(text.contains("no-housing"));
    assert!(!text.contains("luxury-foreign"));
}

#[test]
fn test_options_unknown_metric() {
    let out = run(&["options", "--metric", "salary"]);
    assert!(!out.status.success());
}

#[test]
fn test_batch_json_lines() {
    let ctx = TestContext::new();
    let path = ctx.dir.path().join("batch.csv");
    fs::write(
        &path,
        "age,education,occupation,wealth,marital,housing,vehicle,hobbies,social,certifications\n\
         20-29,phd,doctor,5b+,married,seoul-apt,luxury-foreign,sports,business-leader,professional-license\n\
         20-29,phd\n",
    )
    .unwrap();

    let out = run(&["batch", "--input", path.to_str().unwrap(), "--json"]);
    assert!(out.status.success());

    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(first["totalScore"], 100);
    assert!(second["error"].as_str().unwrap().contains("occupation"));
}

#[test]
fn test_curve_output() {
    let out = run(&["curve", "--points", "4"]);
    assert!(out.status.success());
    let text = stdout(&out);
    let re = Regex::new(r"(?m)^\s*75\.0 \| #+\s+50%$").unwrap();
    assert!(re.is_match(&text), "{}", text);
}
