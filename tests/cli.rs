use assert_cmd::Command;
use git2::{Repository, Signature, Time};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// 2020-02-01 12:00:00 UTC
const FEB_1: i64 = 1_580_558_400;
const DAY: i64 = 86_400;

fn commit_file(repo: &Repository, name: &str, author: &str, time: i64, message: &str) {
    let workdir = repo.workdir().unwrap();
    fs::write(workdir.join(name), format!("{message}\n")).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

    let sig = Signature::new(author, &format!("{author}@example.com"), &Time::new(time, 0)).unwrap();
    let parent = repo.head().ok().map(|head| head.peel_to_commit().unwrap());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap();
}

/// alice: 01/02 (ルートコミット), 01/02, 03/02 / bob: 02/02
fn sample_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path().join("myrepo")).unwrap();
    commit_file(&repo, "a.txt", "alice", FEB_1, "initial import");
    commit_file(&repo, "b.txt", "alice", FEB_1 + 3600, "add b, with a comma");
    commit_file(&repo, "c.txt", "bob", FEB_1 + DAY, "bob's change");
    commit_file(&repo, "a.txt", "alice", FEB_1 + 2 * DAY, "say \"hi\"");
    dir
}

fn cmd() -> Command {
    Command::cargo_bin("commit-evidence").unwrap()
}

#[test]
fn help_exits_successfully() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--fisheye-repo-name"));
}

#[test]
fn missing_author_exits_with_usage() {
    cmd()
        .args(["-r", "/tmp/repo", "-n", "repo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--author"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn lone_date_bound_is_a_missing_argument() {
    cmd()
        .args(["-a", "alice", "-r", "/tmp/repo", "-n", "repo", "-f", "01/02/2020"])
        .assert()
        .code(2);
}

#[test]
fn unknown_flag_exits_with_one() {
    cmd()
        .args(["-a", "alice", "-r", "/tmp/repo", "-n", "repo", "--bogus"])
        .assert()
        .code(1);
}

#[test]
fn invalid_repository_fails() {
    let dir = TempDir::new().unwrap();
    cmd()
        .current_dir(dir.path())
        .args(["-a", "alice", "-n", "repo", "-r"])
        .arg(dir.path().join("nowhere"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open repository"));
}

#[test]
fn writes_both_reports() {
    let dir = sample_repo();
    let repo_path = dir.path().join("myrepo");

    cmd()
        .current_dir(dir.path())
        .args(["-a", "alice", "-n", "fe-repo", "-r"])
        .arg(&repo_path)
        .assert()
        .success()
        .stdout("Collecting commits...done!\n");

    let output = dir.path().join("output");
    let text = fs::read_to_string(output.join("alice_myrepo_evidence_of_work.txt")).unwrap();
    assert!(text.contains("Author:\t\talice\n"));
    assert!(text.contains("Dates:\t\t<DATEFROM> to <DATETO>\n"));
    assert!(text.contains("01/02/2020\n----------\n2 commits\n"));
    assert!(text.contains("\t * Changed [unknown] files\n\t\t\"initial import\"\n"));
    assert!(!text.contains("bob's change"));
    // ログは新しい順なので 03/02 が先に出現し、逆順出力では後ろになる
    assert!(text.find("01/02/2020").unwrap() < text.find("03/02/2020").unwrap());

    let mut rdr = csv::Reader::from_path(output.join("alice_myrepo_svn_commits.csv")).unwrap();
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.len() == 9));
    assert_eq!(&rows[0][0], "03/02/2020");
    assert_eq!(&rows[0][6], "say \"hi\"");
    assert_eq!(&rows[1][6], "add b, with a comma");
    assert!(rows[0][8].starts_with("http://gromit.ebi.ac.uk:10002/changelog/fe-repo?cs="));
}

#[test]
fn date_range_and_output_dir_are_honoured() {
    let dir = sample_repo();
    let repo_path = dir.path().join("myrepo");
    let out = dir.path().join("reports");

    cmd()
        .current_dir(dir.path())
        .args(["-a", "alice", "-n", "fe-repo", "-f", "02/02/2020", "-t", "03/02/2020"])
        .args(["--changelog-url", "https://viewer.example/cl/"])
        .arg("-o")
        .arg(&out)
        .arg("-r")
        .arg(&repo_path)
        .assert()
        .success()
        .stdout("Collecting commits from 02/02/2020 to 03/02/2020...done!\n");

    let mut rdr = csv::Reader::from_path(out.join("alice_myrepo_svn_commits.csv")).unwrap();
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "03/02/2020");
    assert!(rows[0][8].starts_with("https://viewer.example/cl/fe-repo?cs="));
    assert!(!dir.path().join("output").exists());
}
