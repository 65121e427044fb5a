use crate::common::command::{
    changetree_output, init_repository_dir, run_changetree_command, run_git_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_staged_and_working_contents(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two, staged".to_string(),
    ));
    run_git_command(repository_dir.path(), &["add", "a/2.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two, working".to_string(),
    ));

    let staged = changetree_output(repository_dir.path(), &["cat", "a/2.txt", "--staged"])?;
    let working = changetree_output(repository_dir.path(), &["cat", "a/2.txt"])?;

    assert_eq!(staged, "two, staged");
    assert_eq!(working, "two, working");

    Ok(())
}

#[rstest]
fn fail_for_files_missing_from_the_index(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("untracked.txt"),
        "untracked".to_string(),
    ));

    run_changetree_command(repository_dir.path(), &["cat", "untracked.txt", "--staged"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "untracked.txt has no staged contents in the staging selection",
        ));

    Ok(())
}
