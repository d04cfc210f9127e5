use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn moneytracker(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("moneytracker").unwrap();
    cmd.env("MONEY_TRACKER_DATA_DIR", data_dir.path());
    cmd
}

fn add_transaction(data_dir: &TempDir, kind: &str, amount: &str, category: &str, date: &str) {
    moneytracker(data_dir)
        .args(["transaction", "add", kind, amount, category, "--date", date])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded transaction"));
}

#[test]
fn test_add_and_list_transactions() {
    let dir = TempDir::new().unwrap();
    add_transaction(&dir, "income", "1000000", "Salary", "2024-01-05");
    add_transaction(&dir, "expense", "400000", "Rent", "2024-01-10");

    moneytracker(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Showing 2 of 2"));

    moneytracker(&dir)
        .args(["transaction", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"));
}

#[test]
fn test_summary_for_all_time() {
    let dir = TempDir::new().unwrap();
    add_transaction(&dir, "income", "1000000", "Salary", "2024-01-05");
    add_transaction(&dir, "expense", "400000", "Rent", "2024-01-10");

    moneytracker(&dir)
        .args(["summary", "--period", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary: All Time"))
        .stdout(predicate::str::contains("Rp1.000.000,00"))
        .stdout(predicate::str::contains("Rp600.000,00"));
}

#[test]
fn test_report_terminal_and_csv() {
    let dir = TempDir::new().unwrap();
    add_transaction(&dir, "income", "1000000", "Salary", "2024-01-05");
    add_transaction(&dir, "expense", "400000", "Rent", "2024-01-10");

    moneytracker(&dir)
        .args(["report", "--period", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Financial Report: All Time"));

    let output = dir.path().join("report.csv");
    moneytracker(&dir)
        .args(["report", "--period", "all", "--output"])
        .arg(&output)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("Section,Label,Amount,Percentage"));
    assert!(csv.contains("Expense,Rent,400000.00,100.0"));
}

#[test]
fn test_invalid_transaction_is_rejected() {
    let dir = TempDir::new().unwrap();

    moneytracker(&dir)
        .args(["transaction", "add", "expense", "0", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    moneytracker(&dir)
        .args(["transaction", "add", "gift", "100", "Food"])
        .assert()
        .failure();

    moneytracker(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn test_delete_unknown_transaction_fails() {
    let dir = TempDir::new().unwrap();

    moneytracker(&dir)
        .args(["transaction", "delete", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found: 12345"));
}

#[test]
fn test_investment_update_value() {
    let dir = TempDir::new().unwrap();

    let output = moneytracker(&dir)
        .args(["investment", "add", "stocks", "BBCA", "500000", "--date", "2024-01-02"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let id = stdout
        .split_whitespace()
        .nth(2)
        .expect("investment id in output")
        .to_string();

    moneytracker(&dir)
        .args(["investment", "update", &id, "600000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "BBCA: Rp500.000,00 -> Rp600.000,00 (+Rp100.000,00)",
        ));

    moneytracker(&dir)
        .args(["investment", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+20.00%"));

    moneytracker(&dir)
        .args(["audit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UPDATE"));
}

#[test]
fn test_export_json_to_stdout() {
    let dir = TempDir::new().unwrap();
    add_transaction(&dir, "income", "250000", "Freelance", "2024-02-01");

    moneytracker(&dir)
        .args(["export", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"transaction_count\":1"));
}

#[test]
fn test_export_csv_to_file() {
    let dir = TempDir::new().unwrap();
    add_transaction(&dir, "expense", "45.50", "Food", "2024-02-01");

    let output = dir.path().join("transactions.csv");
    moneytracker(&dir)
        .args(["export", "--format", "csv", "--output"])
        .arg(&output)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.contains("2024-02-01,Expense,Food,,45.50"));
}

#[test]
fn test_backup_create_and_list() {
    let dir = TempDir::new().unwrap();
    add_transaction(&dir, "income", "100", "Gift", "2024-03-01");

    moneytracker(&dir)
        .args(["backup", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created: backup-"));

    moneytracker(&dir)
        .args(["backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 1 backup(s)"));
}
