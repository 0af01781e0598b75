use assert_cmd::Command;
use predicates::str::contains;
use std::{fs, path::Path};
use tempfile::tempdir;

fn book(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("addressbook").unwrap();
    cmd.env("STORAGE_CHOICE", "file").arg("--data-dir").arg(dir);
    cmd
}

#[test]
fn export_import() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let book_path = dir.path().join("addressBook.csv");

    book(dir.path())
        .args(["add", "--name", "Bob, Jr.", "--address", "4D5e6F"])
        .assert()
        .success()
        .stdout(contains("Contact added successfully"));

    // Export to a temporary CSV file
    let out_dir = tempdir()?;
    let out_path = out_dir.path().join("out.csv");

    book(dir.path())
        .arg("export")
        .arg("--des")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(contains("Successfully exported 1 contacts"));

    let exported = fs::read_to_string(&out_path)?;
    assert_eq!(exported, "name,address\n\"Bob, Jr.\",4D5e6F\n");

    book(dir.path())
        .args(["delete", "--name", "Bob, Jr."])
        .assert()
        .success()
        .stdout(contains("deleted successfully"));
    assert_eq!(fs::read_to_string(&book_path)?, "");

    // Import twice: the second run only finds duplicates
    book(dir.path())
        .arg("import")
        .arg("--src")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(contains("Successfully imported 1 contacts"));

    book(dir.path())
        .arg("import")
        .arg("--src")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(contains("(1 duplicates skipped)"));

    assert_eq!(fs::read_to_string(&book_path)?, "4D5e6F,Bob, Jr.\n");
    Ok(())
}

#[test]
fn import_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    book(dir.path())
        .arg("import")
        .arg("--src")
        .arg(dir.path().join("nope.csv"))
        .assert()
        .failure()
        .stderr(contains("NotFound(\"CSV file\")"));
    Ok(())
}
