use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::io::Read;
use std::process::Command;
use tempfile::tempdir;
use zip::ZipArchive;

#[test]
fn test_cli_packs_directory_into_sibling_zip() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Setup: a directory with one file at the root and one in a subdirectory
    let workspace = tempdir()?;
    let project = workspace.path().join("project");
    fs::create_dir(&project)?;
    fs::write(project.join("a.txt"), "hi")?;
    fs::create_dir(project.join("sub"))?;
    fs::write(project.join("sub").join("b.txt"), "yo")?;

    // 2. Pack it
    let mut cmd = Command::cargo_bin("zipdir")?;
    cmd.arg(&project);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("saved as"));

    // 3. The archive sits next to the input directory
    let archive_path = workspace.path().join("project.zip");
    assert!(archive_path.exists());

    // 4. It holds exactly the two files, under the directory's own name,
    //    with byte-identical contents
    let mut archive = ZipArchive::new(fs::File::open(&archive_path)?)?;
    assert_eq!(archive.len(), 2);

    let mut content = String::new();
    archive.by_name("project/a.txt")?.read_to_string(&mut content)?;
    assert_eq!(content, "hi");

    content.clear();
    archive
        .by_name("project/sub/b.txt")?
        .read_to_string(&mut content)?;
    assert_eq!(content, "yo");

    Ok(())
}

#[test]
fn test_cli_requires_a_directory_operand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("zipdir")?;
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
    Ok(())
}

#[test]
fn test_cli_rejects_a_regular_file() -> Result<(), Box<dyn std::error::Error>> {
    let workspace = tempdir()?;
    let file = workspace.path().join("plain.txt");
    fs::write(&file, "just a file")?;

    let mut cmd = Command::cargo_bin("zipdir")?;
    cmd.arg(&file);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
    Ok(())
}

#[test]
fn test_cli_rejects_an_empty_directory() -> Result<(), Box<dyn std::error::Error>> {
    let workspace = tempdir()?;
    let empty = workspace.path().join("void");
    fs::create_dir(&empty)?;

    let mut cmd = Command::cargo_bin("zipdir")?;
    cmd.arg(&empty);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("empty"));

    // No archive file may be created for a rejected input.
    assert!(!workspace.path().join("void.zip").exists());
    Ok(())
}

#[test]
fn test_cli_overwrites_a_previous_archive() -> Result<(), Box<dyn std::error::Error>> {
    let workspace = tempdir()?;
    let notes = workspace.path().join("notes");
    fs::create_dir(&notes)?;
    fs::write(notes.join("today.md"), "first draft")?;

    // 1. First run creates the archive
    let mut cmd = Command::cargo_bin("zipdir")?;
    cmd.arg(&notes);
    cmd.assert().success();

    // 2. Second run after an edit lands on the same path, no counter suffix
    fs::write(notes.join("today.md"), "second draft")?;
    let mut cmd = Command::cargo_bin("zipdir")?;
    cmd.arg(&notes);
    cmd.assert().success();

    let archive_path = workspace.path().join("notes.zip");
    let mut archive = ZipArchive::new(fs::File::open(&archive_path)?)?;
    assert_eq!(archive.len(), 1);

    let mut content = String::new();
    archive.by_name("notes/today.md")?.read_to_string(&mut content)?;
    assert_eq!(content, "second draft");

    Ok(())
}
