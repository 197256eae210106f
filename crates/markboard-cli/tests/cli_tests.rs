//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn markboard(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("markboard").unwrap();
    // keep tests isolated from the developer's own config and key
    cmd.current_dir(dir.path())
        .env_remove("MARKBOARD_GEMINI_KEY")
        .env("HOME", dir.path());
    cmd
}

#[test]
fn analyze_prints_statistics() {
    let dir = TempDir::new().unwrap();
    markboard(&dir)
        .args(["analyze", "--scores", "60+70+80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("平均分: 70.00"))
        .stdout(predicate::str::contains("及格率: 100.0%"))
        .stdout(predicate::str::contains("90~99分"));
}

#[test]
fn analyze_without_scores_prints_placeholder() {
    let dir = TempDir::new().unwrap();
    markboard(&dir)
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("暂无成绩数据"));
}

#[test]
fn analyze_rejects_out_of_range_batch() {
    let dir = TempDir::new().unwrap();
    markboard(&dir)
        .args(["analyze", "--scores", "105+50"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Rejected"))
        .stdout(predicate::str::contains("暂无成绩数据"));
}

#[test]
fn analyze_threshold_flags_override_defaults() {
    let dir = TempDir::new().unwrap();
    markboard(&dir)
        .args(["analyze", "--scores", "70", "--passing", "75"])
        .assert()
        .success()
        .stdout(predicate::str::contains("不及格率: 100.0%"));
}

#[test]
fn analyze_raised_max_score_accepts_larger_values() {
    let dir = TempDir::new().unwrap();
    markboard(&dir)
        .args(["analyze", "--scores", "120", "--max-score", "150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("录入样本: 1 人"));
}

#[test]
fn analyze_writes_json_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    markboard(&dir)
        .args(["analyze", "--scores", "90+72+58"])
        .arg("--json")
        .arg(&path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"count\": 3"));
    assert!(content.contains("\"passing\": 60.0"));
}

#[test]
fn export_writes_bom_prefixed_csv() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.csv");
    markboard(&dir)
        .args(["export", "--scores", "95"])
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV report saved to"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("\u{feff}项目,数值"));
    assert!(content.contains("录入学生总数,1 人"));
    assert!(content.contains("90~99分,1"));
}

#[test]
fn export_without_scores_fails() {
    let dir = TempDir::new().unwrap();
    markboard(&dir)
        .arg("export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no scores to export"));
}

#[test]
fn advise_prompt_only_prints_the_template() {
    let dir = TempDir::new().unwrap();
    markboard(&dir)
        .args(["advise", "--scores", "85+92", "--prompt-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("资深教育专家"))
        .stdout(predicate::str::contains("学生总数: 2"));
}

#[test]
fn advise_uses_configured_mock_advisor() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("markboard.toml");
    std::fs::write(
        &config_path,
        r###"
default_advisor = "mock"

[advisors.mock]
type = "mock"
reply = "## 诊断\n\n全员及格，保持节奏。"
"###,
    )
    .unwrap();

    markboard(&dir)
        .args(["advise", "--scores", "85+92"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("全员及格"));
}

#[test]
fn validate_reports_discards_and_rejections() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("scores.txt");
    std::fs::write(&file, "85+8.5.5+90\n200\n").unwrap();

    markboard(&dir)
        .args(["validate", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("discarding \"8.5.5\""))
        .stdout(predicate::str::contains("exceeds max score 100"))
        .stdout(predicate::str::contains(
            "2 valid value(s), 1 discarded segment(s), 1 rejected line(s).",
        ));
}

#[test]
fn validate_clean_input() {
    let dir = TempDir::new().unwrap();
    markboard(&dir)
        .args(["validate", "--scores", "60+70+80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All score entries valid."));
}

#[test]
fn validate_without_input_fails() {
    let dir = TempDir::new().unwrap();
    markboard(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to validate"));
}

#[test]
fn init_creates_starter_config() {
    let dir = TempDir::new().unwrap();
    markboard(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created markboard.toml"));

    let content = std::fs::read_to_string(dir.path().join("markboard.toml")).unwrap();
    assert!(content.contains("[advisors.gemini]"));
    assert!(content.contains("[thresholds]"));

    // second run leaves the existing file alone
    markboard(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
