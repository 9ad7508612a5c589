use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn savesmart(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("savesmart").unwrap();
    cmd.env("SAVESMART_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn status_on_empty_draft_is_zero_percent() {
    let dir = TempDir::new().unwrap();
    savesmart(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("[------------------------------]   0%"))
        .stdout(predicate::str::contains("No income sources yet."));
}

#[test]
fn adding_income_reaches_33_percent() {
    let dir = TempDir::new().unwrap();
    savesmart(&dir)
        .args(["income", "add", "Salary", "4200", "--frequency", "bi-weekly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added income source 'Salary'"))
        .stdout(predicate::str::contains(" 33%"));

    savesmart(&dir)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bi-weekly"))
        .stdout(predicate::str::contains("$109200.00"));
}

#[test]
fn invalid_income_is_rejected() {
    let dir = TempDir::new().unwrap();
    savesmart(&dir)
        .args(["income", "add", "   ", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Income source name is required"))
        .stderr(predicate::str::contains("Amount must be greater than zero"));

    savesmart(&dir)
        .args(["income", "add", "Salary", "12."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be greater than zero"));
}

#[test]
fn only_income_source_cannot_be_removed() {
    let dir = TempDir::new().unwrap();
    savesmart(&dir)
        .args(["income", "add", "Salary", "3000"])
        .assert()
        .success();

    savesmart(&dir)
        .args(["income", "remove", "salary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot remove the only income source"));

    savesmart(&dir)
        .args(["income", "add", "Tutoring", "40", "-f", "weekly"])
        .assert()
        .success();

    savesmart(&dir)
        .args(["income", "remove", "salary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed income source 'Salary'"));
}

#[test]
fn update_withholds_nothing_valid() {
    let dir = TempDir::new().unwrap();
    savesmart(&dir)
        .args(["income", "add", "Salary", "3000"])
        .assert()
        .success();

    savesmart(&dir)
        .args(["income", "update", "Salary", "--amount", "3100.50", "--name", "Net salary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated income source 'Net salary': $3100.50 monthly"));

    savesmart(&dir)
        .args(["income", "update", "Net salary", "--amount", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be greater than zero"));
}

#[test]
fn all_three_groups_reach_100_percent() {
    let dir = TempDir::new().unwrap();
    savesmart(&dir)
        .args(["income", "add", "Salary", "3000"])
        .assert()
        .success();
    savesmart(&dir)
        .args(["expense", "select", "Housing", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 67%"));
    savesmart(&dir)
        .args(["goal", "add", "Emergency fund", "5000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100%"));

    savesmart(&dir)
        .args(["export", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"completionPercentage\": 100"));
}

#[test]
fn blank_goal_is_rejected() {
    let dir = TempDir::new().unwrap();
    savesmart(&dir)
        .args(["goal", "add", "  ", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Goal description is required"));
}

#[test]
fn onboard_reads_answers_from_stdin() {
    let dir = TempDir::new().unwrap();
    let answers = "\nSalary\n2500\nmonthly\nno\n1\nPet Care\nHoliday\n1500\nno\nyes\n";
    savesmart(&dir)
        .arg("onboard")
        .write_stdin(answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Onboarding complete!"));

    savesmart(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom-expense,,Pet Care,,"))
        .stdout(predicate::str::contains("Holiday,1500.00"));
}

#[test]
fn reset_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    savesmart(&dir)
        .args(["income", "add", "Salary", "3000"])
        .assert()
        .success();

    savesmart(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Re-run with --yes"));

    savesmart(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved plan deleted."));

    savesmart(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("  0%"));
}

#[test]
fn hex_digit_names_do_not_collide_with_ids() {
    let dir = TempDir::new().unwrap();
    savesmart(&dir)
        .args(["income", "add", "Salary", "3000"])
        .assert()
        .success();

    for name in ["a", "b", "c", "d", "e", "f", "0", "1", "Bed", "Cafe"] {
        savesmart(&dir)
            .args(["income", "add", name, "10"])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("Added income source '{}'", name)));
    }

    savesmart(&dir)
        .args(["income", "remove", "Bed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed income source 'Bed'"));

    savesmart(&dir)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Cafe"));
}

#[test]
fn duplicate_names_are_rejected() {
    let dir = TempDir::new().unwrap();
    savesmart(&dir)
        .args(["income", "add", "Salary", "3000"])
        .assert()
        .success();
    savesmart(&dir)
        .args(["income", "add", "salary", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Income source already exists: salary"));

    savesmart(&dir)
        .args(["goal", "add", "Holiday", "1500"])
        .assert()
        .success();
    savesmart(&dir)
        .args(["goal", "add", " holiday ", "900"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Goal already exists: holiday"));
}
