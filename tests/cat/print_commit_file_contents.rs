use crate::common::command::{
    changetree_output, repository_with_two_commits, run_changetree_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("HEAD", "1.txt", "one, revised")]
#[case("HEAD~1", "1.txt", "one")]
#[case("HEAD~1", "a/b/3.txt", "three")]
#[case("HEAD", "c/4.txt", "four")]
fn print_commit_file_contents(
    repository_with_two_commits: TempDir,
    #[case] revision: &str,
    #[case] path: &str,
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = repository_with_two_commits;

    let actual = changetree_output(repository_dir.path(), &["cat", "--rev", revision, path])?;

    assert_eq!(actual, expected);

    Ok(())
}

#[rstest]
fn fail_for_files_deleted_by_the_commit(repository_with_two_commits: TempDir) {
    run_changetree_command(
        repository_with_two_commits.path(),
        &["cat", "--rev", "HEAD", "a/b/3.txt"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains(
        "a/b/3.txt has no unstaged contents in the commit selection",
    ));
}
