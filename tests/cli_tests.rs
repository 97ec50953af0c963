mod common;
use common::{SAMPLE_LOG, lgs, temp_csv};
use predicates::prelude::*;

#[test]
fn test_analyze_prints_all_sections() {
    let file = temp_csv("analyze_all_sections", SAMPLE_LOG);

    lgs()
        .args(["analyze", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Average Daily Hours by Weekday"))
        .stdout(predicate::str::contains("Time Spent by Task Type"))
        .stdout(predicate::str::contains("Task Breakdown by Weekday (%)"))
        .stdout(predicate::str::contains(
            "Time Spent on Sub-Teams by Weekday (%)",
        ))
        .stdout(predicate::str::contains("Task Breakdown per Sub-Team"))
        .stdout(predicate::str::contains("Monday"))
        .stdout(predicate::str::contains("Design"));
}

#[test]
fn test_analyze_single_table() {
    let file = temp_csv("analyze_single_table", SAMPLE_LOG);

    lgs()
        .args(["analyze", &file, "--table", "task-totals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Time Spent by Task Type"))
        .stdout(predicate::str::contains("Average Daily Hours by Weekday").not());
}

#[test]
fn test_analyze_zero_files_is_a_noop() {
    lgs()
        .args(["analyze"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to analyze"));
}

#[test]
fn test_analyze_missing_columns_fails_with_names() {
    let file = temp_csv(
        "analyze_missing_columns",
        "Date,Notes\n2024-01-01,whatever\n",
    );

    lgs()
        .args(["analyze", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required columns: Hours, Description, SubTeam",
        ));
}

#[test]
fn test_analyze_concatenates_multiple_files() {
    let a = temp_csv(
        "analyze_multi_a",
        "Date,Hours,Description,SubTeam\n2024-01-01,4,[Design] a,Core\n",
    );
    let b = temp_csv(
        "analyze_multi_b",
        "Date,Hours,Description,SubTeam\n2024-01-02,6,[Review] b,Infra\n",
    );

    lgs()
        .args(["analyze", &a, &b, "--table", "task-totals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Design"))
        .stdout(predicate::str::contains("Review"));
}

#[test]
fn test_analyze_all_rows_invalid_shows_placeholders() {
    let file = temp_csv(
        "analyze_all_invalid",
        "Date,Hours,Description,SubTeam\nnope,many,[X] y,Core\n",
    );

    lgs()
        .args(["analyze", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Not enough data to display average daily hours.",
        ))
        .stdout(predicate::str::contains(
            "Not enough task data to break down by weekday.",
        ));
}

#[test]
fn test_decimals_override() {
    let file = temp_csv("analyze_decimals", SAMPLE_LOG);

    lgs()
        .args(["analyze", &file, "--decimals", "2", "--table", "weekday-hours"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4.00"));
}

#[test]
fn test_config_path_is_printed() {
    lgs()
        .args(["config", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("logsight.conf"));
}

#[test]
fn test_config_print_shows_defaults() {
    lgs()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("decimals"))
        .stdout(predicate::str::contains("date_format"));
}
