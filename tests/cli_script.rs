use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn tally(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally_cli").unwrap();
    cmd.env("TALLY_CLI_SCRIPT", "1")
        .env("XDG_DATA_HOME", temp.path());
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let temp = TempDir::new().unwrap();
    let csv_path = temp.path().join("records.csv");
    let input = format!(
        "add 50 Salary income\nadd 12.50 Food expense\nincome\nexpense\nexport {}\nexit\n",
        csv_path.display()
    );

    tally(&temp)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Total income: 50.00"))
        .stdout(contains("Total expenses: 12.50"))
        .stdout(contains("Exported 2 records"));

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("ID,Amount,Category,Date,Type"));
    assert!(csv.contains("0,50.00,Salary"));
    assert!(csv.contains("1,12.50,Food"));
}

#[test]
fn digit_aliases_drive_the_numbered_menu() {
    let temp = TempDir::new().unwrap();

    tally(&temp)
        .write_stdin("1 5 Coffee expense\n4\n6\n")
        .assert()
        .success()
        .stdout(contains("Recorded #0 expense 5.00 (Coffee)"))
        .stdout(contains("Total expenses: 5.00"));
}

#[test]
fn unknown_command_prints_a_suggestion() {
    let temp = TempDir::new().unwrap();

    tally(&temp)
        .write_stdin("lst\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `lst`"))
        .stdout(contains("Suggestion: `list`?"));
}

#[test]
fn malformed_amount_reports_and_continues() {
    let temp = TempDir::new().unwrap();

    tally(&temp)
        .write_stdin("add abc Food expense\nlist\nexit\n")
        .assert()
        .success()
        .stdout(contains("`abc` is not a valid amount"))
        .stdout(contains("No records yet"));
}

#[test]
fn export_failure_keeps_the_session_alive() {
    let temp = TempDir::new().unwrap();
    let input = format!("export {}\nversion\nexit\n", temp.path().display());

    tally(&temp)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("tally 0.1.0"));
}
