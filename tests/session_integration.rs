use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn clientbook(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("clientbook").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(dir.join("config"));
    cmd
}

fn read_store(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn register_then_exit_writes_data_file() {
    let dir = TempDir::new().unwrap();

    clientbook(dir.path())
        .write_stdin("1\nAna Souza\n86988887777\nManicure\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ID: 1]"))
        .stdout(predicate::str::contains("Goodbye!"));

    // Default location is clientes.json in the working directory
    let data = read_store(&dir.path().join("clientes.json"));
    assert_eq!(data["next_id"], 2);
    assert_eq!(data["clients"][0]["id"], 1);
    assert_eq!(data["clients"][0]["name"], "Ana Souza");
    assert_eq!(data["clients"][0]["phone"], "86988887777");
    assert_eq!(data["clients"][0]["service"], "Manicure");
}

#[test]
fn state_survives_restart_and_ids_are_not_reused() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("data/clients.json");

    clientbook(dir.path())
        .arg("--data-file")
        .arg(&data_file)
        .write_stdin(concat!(
            "1\nAna Souza\n86988887777\nManicure\n\n",
            "1\nBruno\n86999990000\nPedreiro\n\n",
            "4\n2\ny\n\n",
            "7\n"
        ))
        .assert()
        .success();

    clientbook(dir.path())
        .arg("--data-file")
        .arg(&data_file)
        .write_stdin("1\nCarla\n8633334444\nManicure\n\n2\n\n6\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ID: 3]"))
        .stdout(predicate::str::contains("Bruno").not())
        .stdout(predicate::str::contains("Total clients: 2"))
        .stdout(predicate::str::contains("- Manicure: 2 client(s)"));

    let data = read_store(&data_file);
    assert_eq!(data["next_id"], 4);
    let ids: Vec<u64> = data["clients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn corrupt_data_file_starts_fresh_with_warning() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("clientes.json");
    fs::write(&data_file, "{ definitely not json").unwrap();

    clientbook(dir.path())
        .write_stdin("2\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting a new database"))
        .stdout(predicate::str::contains("No clients registered."));

    // The corrupt content is replaced on the exit save
    let data = read_store(&data_file);
    assert_eq!(data["next_id"], 1);
    assert_eq!(data["clients"].as_array().unwrap().len(), 0);
}

#[test]
fn corrupt_data_file_is_backed_up_when_configured() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.json"),
        r#"{ "data_file": "store.json", "backup_corrupt": true }"#,
    )
    .unwrap();
    fs::write(dir.path().join("store.json"), "garbage").unwrap();

    clientbook(dir.path())
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Previous data copied to"));

    let backups: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("store.json.corrupt-"))
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(
        fs::read_to_string(dir.path().join(&backups[0])).unwrap(),
        "garbage"
    );
}

#[test]
fn search_and_update_through_the_menu() {
    let dir = TempDir::new().unwrap();

    clientbook(dir.path())
        .write_stdin(concat!(
            "1\nAna Souza\n86988887777\nManicure\n\n",
            "1\nBruno\n86999990000\nPedreiro\n\n",
            "5\n9999\n\n",
            "3\n1\n\n\nPedicure\n\n",
            "7\n"
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("1 client(s) found:"))
        .stdout(predicate::str::contains("ID: 2 | Bruno"))
        .stdout(predicate::str::contains("Editing: Ana Souza"));

    let data = read_store(&dir.path().join("clientes.json"));
    assert_eq!(data["clients"][0]["service"], "Pedicure");
    assert_eq!(data["clients"][0]["phone"], "86988887777");
}

#[test]
fn closed_stdin_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    clientbook(dir.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));

    assert!(dir.path().join("clientes.json").exists());
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.json"), "not json").unwrap();

    clientbook(dir.path())
        .write_stdin("1\nAna Souza\n86988887777\nManicure\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using default settings."))
        .stdout(predicate::str::contains("Goodbye!"));

    let data = read_store(&dir.path().join("clientes.json"));
    assert_eq!(data["clients"][0]["name"], "Ana Souza");
}

#[test]
fn invalid_utf8_on_stdin_still_saves() {
    let dir = TempDir::new().unwrap();

    clientbook(dir.path())
        .write_stdin(&b"1\nAna\xff\n86988887777\nManicure\n\n7\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ID: 1]"))
        .stdout(predicate::str::contains("Goodbye!"));

    let data = read_store(&dir.path().join("clientes.json"));
    assert_eq!(data["clients"][0]["name"], "Ana\u{fffd}");
}
