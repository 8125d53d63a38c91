use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zipsplit::constants::LIMIT_SIZE;

fn read_archive(path: &Path) -> Vec<(String, Vec<u8>)> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut entry = archive.by_index(i).unwrap();
            assert_eq!(entry.compression(), zip::CompressionMethod::Stored);
            let mut data = Vec::new();
            entry.read_to_end(&mut data).unwrap();
            (entry.name().to_string(), data)
        })
        .collect()
}

#[test]
fn packs_current_directory_into_parent() {
    let temp = assert_fs::TempDir::new().unwrap();
    let proj = temp.child("proj");
    proj.create_dir_all().unwrap();
    proj.child("notes.txt").write_str("some notes\n").unwrap();
    proj.child("photo.jpg").write_binary(&[0xFF, 0xD8, 0x00, 0x42]).unwrap();

    let mut cmd = cargo_bin_cmd!("zipsplit");
    cmd.current_dir(proj.path());
    cmd.env_remove("RUST_LOG");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("proj001.zip (2 files, 15 bytes)"))
        .stdout(predicate::str::contains("proj002.zip").not());

    let archive = temp.child("proj001.zip");
    archive.assert(predicate::path::exists());
    proj.child("proj001.zip").assert(predicate::path::missing());

    let entries = read_archive(archive.path());
    assert_eq!(
        entries,
        vec![
            ("notes.txt".to_string(), b"some notes\n".to_vec()),
            ("photo.jpg".to_string(), vec![0xFF, 0xD8, 0x00, 0x42]),
        ]
    );
}

#[test]
fn empty_directory_writes_single_empty_archive() {
    let temp = assert_fs::TempDir::new().unwrap();
    let proj = temp.child("proj");
    proj.create_dir_all().unwrap();

    let mut cmd = cargo_bin_cmd!("zipsplit");
    cmd.current_dir(proj.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("proj001.zip (0 files, 0 bytes)"));

    assert!(read_archive(temp.child("proj001.zip").path()).is_empty());
}

#[test]
fn stem_flag_renames_archives() {
    let temp = assert_fs::TempDir::new().unwrap();
    let proj = temp.child("proj");
    proj.create_dir_all().unwrap();
    proj.child("a.txt").write_str("a").unwrap();

    let mut cmd = cargo_bin_cmd!("zipsplit");
    cmd.current_dir(proj.path());
    cmd.args(["--stem", "upload"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("upload001.zip"));

    temp.child("upload001.zip").assert(predicate::path::exists());
    temp.child("proj001.zip").assert(predicate::path::missing());
}

#[test]
fn subdirectories_are_skipped_with_a_warning() {
    let temp = assert_fs::TempDir::new().unwrap();
    let proj = temp.child("proj");
    proj.child("nested").create_dir_all().unwrap();
    proj.child("nested/inner.txt").write_str("inner").unwrap();
    proj.child("top.txt").write_str("top").unwrap();

    let mut cmd = cargo_bin_cmd!("zipsplit");
    cmd.current_dir(proj.path());
    cmd.env_remove("RUST_LOG");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("skipping subdirectory"))
        .stdout(predicate::str::contains("proj001.zip (1 files, 3 bytes)"));

    let entries = read_archive(temp.child("proj001.zip").path());
    assert_eq!(entries, vec![("top.txt".to_string(), b"top".to_vec())]);
}

#[test]
fn oversized_file_fails_without_writing_archives() {
    let temp = assert_fs::TempDir::new().unwrap();
    let proj = temp.child("proj");
    proj.create_dir_all().unwrap();
    proj.child("a.txt").write_str("small").unwrap();
    // Sparse, so the test does not write a gigabyte.
    let big = File::create(proj.child("big.bin").path()).unwrap();
    big.set_len(LIMIT_SIZE + 1).unwrap();
    drop(big);

    let mut cmd = cargo_bin_cmd!("zipsplit");
    cmd.current_dir(proj.path());

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("big.bin"))
        .stderr(predicate::str::contains((LIMIT_SIZE + 1).to_string()));

    temp.child("proj001.zip").assert(predicate::path::missing());
}

#[test]
fn rerun_overwrites_previous_archives() {
    let temp = assert_fs::TempDir::new().unwrap();
    let proj = temp.child("proj");
    proj.create_dir_all().unwrap();
    proj.child("a.txt").write_str("first").unwrap();

    cargo_bin_cmd!("zipsplit")
        .current_dir(proj.path())
        .assert()
        .success();

    proj.child("a.txt").write_str("second run").unwrap();
    cargo_bin_cmd!("zipsplit")
        .current_dir(proj.path())
        .assert()
        .success();

    let entries = read_archive(temp.child("proj001.zip").path());
    assert_eq!(entries, vec![("a.txt".to_string(), b"second run".to_vec())]);
}
