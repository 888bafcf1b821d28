//! End-to-end CLI tests against a temporary database.

use assert_cmd::Command;
use tempfile::TempDir;

fn cairn(db: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cairn").unwrap();
    cmd.arg("--db").arg(db.path().join("cairn.db"));
    cmd
}

fn init(db: &TempDir) {
    cairn(db).arg("init").assert().success();
}

fn stdout_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout should be JSON")
}

#[test]
fn version_runs() {
    Command::cargo_bin("cairn")
        .unwrap()
        .arg("version")
        .assert()
        .success();
}

#[test]
fn commands_refuse_uninitialized_database() {
    let db = TempDir::new().unwrap();
    cairn(&db).arg("list").assert().code(2);
}

#[test]
fn init_twice_requires_force() {
    let db = TempDir::new().unwrap();
    init(&db);
    cairn(&db).arg("init").assert().code(2);
    cairn(&db).args(["init", "--force"]).assert().success();
}

#[test]
fn note_round_trip() {
    let db = TempDir::new().unwrap();
    init(&db);

    let out = cairn(&db)
        .args(["--json", "note", "add", "Groceries", "--body", "milk"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = stdout_json(&out)["id"].as_str().unwrap().to_string();

    let out = cairn(&db)
        .args(["--json", "note", "show", id.as_str()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let shown = stdout_json(&out);
    assert_eq!(shown["title"], "Groceries");
    assert_eq!(shown["entry_type"], "note");
    assert_eq!(shown["body"], "milk");

    let out = cairn(&db)
        .args(["--json", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(stdout_json(&out)["count"], 1);

    cairn(&db).args(["note", "rm", id.as_str()]).assert().success();
    cairn(&db).args(["note", "show", id.as_str()]).assert().code(3);
}

#[test]
fn blank_title_is_rejected_with_validation_exit_code() {
    let db = TempDir::new().unwrap();
    init(&db);
    cairn(&db).args(["note", "add", "   "]).assert().code(4);
}

#[test]
fn todo_items_order_and_toggle() {
    let db = TempDir::new().unwrap();
    init(&db);

    let out = cairn(&db)
        .args(["--json", "todo", "add", "Packing"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = stdout_json(&out)["id"].as_str().unwrap().to_string();

    for body in ["A", "B", "C"] {
        cairn(&db)
            .args(["todo", "item", "add", id.as_str(), body])
            .assert()
            .success();
    }

    let out = cairn(&db)
        .args(["--json", "todo", "show", id.as_str()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let shown = stdout_json(&out);
    let items = shown["items"].as_array().unwrap();
    let bodies: Vec<&str> = items.iter().map(|i| i["body"].as_str().unwrap()).collect();
    assert_eq!(bodies, ["A", "B", "C"]);

    let first = items[0]["id"].as_str().unwrap();
    cairn(&db)
        .args(["todo", "item", "toggle", first])
        .assert()
        .success();

    let out = cairn(&db)
        .args(["--json", "todo", "show", id.as_str()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(stdout_json(&out)["items"][0]["is_done"], true);
}

#[test]
fn bookmark_check_records_failure_for_unreachable_host() {
    let db = TempDir::new().unwrap();
    init(&db);

    let out = cairn(&db)
        .args(["--json", "bookmark", "add", "dead", "http://127.0.0.1:1/"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = stdout_json(&out)["id"].as_str().unwrap().to_string();

    let out = cairn(&db)
        .args(["--json", "bookmark", "check", id.as_str()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let outcome = stdout_json(&out);
    assert_eq!(outcome["status"], 0);
    assert!(outcome["content_hash"].is_null());

    let out = cairn(&db)
        .args(["--json", "bookmark", "show", id.as_str()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let shown = stdout_json(&out);
    assert_eq!(shown["last_status"], 0);
    assert!(shown["last_checked_at"].is_number());
}
