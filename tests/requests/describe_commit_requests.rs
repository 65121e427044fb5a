use crate::common::command::{changetree_output, repository_with_two_commits, short_oid};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn describe_commit_requests(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = repository_with_two_commits;
    let head = short_oid(repository_dir.path(), "HEAD")?;
    let root = short_oid(repository_dir.path(), "HEAD~1")?;

    let commit = changetree_output(repository_dir.path(), &["requests", "--rev", "HEAD", "1.txt"])?;
    let root_commit =
        changetree_output(repository_dir.path(), &["requests", "--rev", "HEAD~1", "1.txt"])?;
    let against_itself = changetree_output(
        repository_dir.path(),
        &["requests", "--rev", "HEAD", "--parent", "HEAD", "1.txt", "--staged"],
    )?;

    assert_eq!(
        commit,
        format!("diff: commit {root} -> commit {head}\nblame: commit {head}\n")
    );
    assert_eq!(
        root_commit,
        format!("diff: empty -> commit {root}\nblame: commit {root}\n")
    );
    assert_eq!(
        against_itself,
        format!("diff: commit {head} -> commit {head}\nblame: commit {head}\n")
    );

    Ok(())
}
