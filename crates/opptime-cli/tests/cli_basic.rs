//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own data directory.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_opptime"))
        .args(args)
        .env("OPPTIME_DATA_DIR", data_dir)
        .env_remove("OPPTIME_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("stdout is JSON")
}

fn seed_directory(data_dir: &Path) {
    std::fs::write(
        data_dir.join("opportunities.csv"),
        "Record Id,Deal Name,Company Name,Deal Owner\n\
         R1,Data Platform,Acme,Dana\n\
         R2,Edge Rollout,Globex,Lee\n",
    )
    .unwrap();
}

#[test]
fn test_status_when_idle() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["timer", "status"]);
    assert_eq!(code, 0);
    let v = json(&stdout);
    assert_eq!(v["type"], "StateSnapshot");
    assert_eq!(v["state"], "idle");
    assert_eq!(v["elapsed_secs"], 0);
}

#[test]
fn test_start_status_stop_and_count() {
    let dir = TempDir::new().unwrap();
    seed_directory(dir.path());

    let (code, stdout, stderr) = run_cli(
        dir.path(),
        &["timer", "start", "--opportunity", "R1", "--activity", "proposal support"],
    );
    assert_eq!(code, 0, "start failed: {stderr}");
    let started = json(&stdout);
    assert_eq!(started["type"], "TimerStarted");
    assert_eq!(started["activity"], "Proposal Support");

    let (code, stdout, _) = run_cli(dir.path(), &["timer", "status"]);
    assert_eq!(code, 0);
    let status = json(&stdout);
    assert_eq!(status["state"], "running");
    assert_eq!(status["selection"]["opportunity_id"], "R1");

    let (code, stdout, stderr) = run_cli(dir.path(), &["timer", "stop"]);
    assert_eq!(code, 0, "stop failed: {stderr}");
    let record = json(&stdout);
    assert_eq!(record["recordId"], "R1");
    assert_eq!(record["dealName"], "Data Platform");
    assert_eq!(record["companyName"], "Acme");
    assert_eq!(record["role"], "Pre-Sales");
    assert!(stderr.contains("Saved logs: 1"));

    let (code, stdout, _) = run_cli(dir.path(), &["log", "count"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["count"], 1);

    let (_, stdout, _) = run_cli(dir.path(), &["timer", "status"]);
    assert_eq!(json(&stdout)["state"], "idle");
}

#[test]
fn test_pause_and_resume() {
    let dir = TempDir::new().unwrap();
    run_cli(
        dir.path(),
        &["timer", "start", "--opportunity", "R2", "--activity", "Internal Meetings"],
    );

    let (code, stdout, _) = run_cli(dir.path(), &["timer", "pause"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["type"], "TimerPaused");

    let (code, _, stderr) = run_cli(dir.path(), &["timer", "pause"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));

    let (code, stdout, _) = run_cli(dir.path(), &["timer", "resume"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["type"], "TimerResumed");
}

#[test]
fn test_unknown_opportunity_is_logged_with_placeholders() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(
        dir.path(),
        &["timer", "start", "--opportunity", "R404", "--activity", "Internal Meetings"],
    );
    assert_eq!(code, 0);
    assert!(stderr.contains("not in the directory"));

    let (code, stdout, _) = run_cli(dir.path(), &["timer", "stop"]);
    assert_eq!(code, 0);
    let record = json(&stdout);
    assert_eq!(record["dealName"], "R404");
    assert_eq!(record["companyName"], "Unknown");
    assert_eq!(record["dealOwner"], "Unknown");
}

#[test]
fn test_unreadable_directory_does_not_block_stop() {
    let dir = TempDir::new().unwrap();
    seed_directory(dir.path());
    let (code, _, _) = run_cli(
        dir.path(),
        &["timer", "start", "--opportunity", "R1", "--activity", "Proposal Support"],
    );
    assert_eq!(code, 0);

    std::fs::write(
        dir.path().join("opportunities.csv"),
        "Record Id,Deal Name\nR1,Deal\n",
    )
    .unwrap();

    let (code, stdout, stderr) = run_cli(dir.path(), &["timer", "status"]);
    assert_eq!(code, 0, "status failed: {stderr}");
    assert_eq!(json(&stdout)["state"], "running");

    let (code, stdout, stderr) = run_cli(dir.path(), &["timer", "stop"]);
    assert_eq!(code, 0, "stop failed: {stderr}");
    assert!(stderr.contains("failed to load opportunity directory"));
    let record = json(&stdout);
    assert_eq!(record["dealName"], "R1");
    assert_eq!(record["companyName"], "Unknown");

    let (code, stdout, _) = run_cli(dir.path(), &["log", "count"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["count"], 1);
}

#[test]
fn test_start_rejects_missing_selection() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(
        dir.path(),
        &["timer", "start", "--opportunity", "R1", "--activity", ""],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));

    let (code, _, stderr) = run_cli(
        dir.path(),
        &["timer", "start", "--opportunity", "R1", "--activity", "Golf"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown activity"));

    let (_, stdout, _) = run_cli(dir.path(), &["timer", "status"]);
    assert_eq!(json(&stdout)["state"], "idle");
}

#[test]
fn test_stop_when_idle_fails() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["timer", "stop"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));

    let (_, stdout, _) = run_cli(dir.path(), &["log", "count"]);
    assert_eq!(json(&stdout)["count"], 0);
}

#[test]
fn test_export_nothing_to_export() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.csv");
    let (code, stdout, stderr) = run_cli(
        dir.path(),
        &[
            "export",
            "--period",
            "weekly",
            "--date",
            "2024-03-06",
            "--output",
            out.to_str().unwrap(),
        ],
    );
    assert_eq!(code, 0);
    assert!(stderr.contains("nothing to export"));
    assert!(stderr.contains("2024-03-04 to 2024-03-10"), "{stderr}");
    assert_eq!(json(&stdout)["status"], "nothing_to_export");
    assert!(!out.exists());

    let (code, _, stderr) = run_cli(
        dir.path(),
        &["export", "--date", "2024-03-05", "--output", out.to_str().unwrap()],
    );
    assert_eq!(code, 0);
    assert!(stderr.contains("no time logs on 2024-03-05"), "{stderr}");
}

#[test]
fn test_export_writes_csv_pair() {
    let dir = TempDir::new().unwrap();
    seed_directory(dir.path());
    run_cli(
        dir.path(),
        &["timer", "start", "--opportunity", "R1", "--activity", "Proposal Support"],
    );
    run_cli(dir.path(), &["timer", "stop"]);

    let out = dir.path().join("exports").join("today.csv");
    let (code, stdout, stderr) = run_cli(
        dir.path(),
        &["export", "--format", "csv", "--period", "daily", "--output", out.to_str().unwrap()],
    );
    assert_eq!(code, 0, "export failed: {stderr}");
    let outcome = json(&stdout);
    assert_eq!(outcome["status"], "written");
    assert_eq!(outcome["record_count"], 1);

    let detailed = std::fs::read_to_string(&out).unwrap();
    assert!(detailed.starts_with("Date,"));
    assert!(detailed.contains("Data Platform"));
    let summary = std::fs::read_to_string(dir.path().join("exports/today_weekly_summary.csv")).unwrap();
    assert!(summary.contains("ATTENDANCE HOURS"));
    assert!(summary.contains("Proposal Support"));
}

#[test]
fn test_opportunity_show() {
    let dir = TempDir::new().unwrap();
    seed_directory(dir.path());

    let (code, stdout, _) = run_cli(dir.path(), &["opportunity", "show", "R2"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["dealName"], "Edge Rollout");

    let (code, stdout, _) = run_cli(dir.path(), &["opportunity", "list"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout).as_array().unwrap().len(), 2);

    let (code, _, stderr) = run_cli(dir.path(), &["opportunity", "show", "R9"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_activity_list() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["activity", "list"]);
    assert_eq!(code, 0);
    let names = json(&stdout);
    assert_eq!(names.as_array().unwrap().len(), 8);
    assert!(names.as_array().unwrap().contains(&"Proposal Support".into()));
}

#[test]
fn test_config_get_set_reset() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "tracker.default_role"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "Pre-Sales");

    let (code, _, _) = run_cli(dir.path(), &["config", "set", "export.default_format", "xlsx"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "export.default_format"]);
    assert_eq!(stdout.trim(), "xlsx");

    let (code, _, _) = run_cli(dir.path(), &["config", "set", "export.default_format", "pdf"]);
    assert_eq!(code, 1);

    let (code, _, _) = run_cli(dir.path(), &["config", "get", "nope.key"]);
    assert_eq!(code, 1);

    run_cli(dir.path(), &["config", "reset"]);
    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "export.default_format"]);
    assert_eq!(stdout.trim(), "csv");
}
