use crate::common::command::{
    changetree_output, git_add_all, git_commit, repository_with_two_commits,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_commit_tree_against_explicit_parent(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = repository_with_two_commits;

    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two, third commit".to_string(),
    ));
    git_add_all(repository_dir.path());
    git_commit(repository_dir.path(), "Third commit")
        .assert()
        .success();

    let against_first_parent =
        changetree_output(repository_dir.path(), &["tree", "--rev", "HEAD", "--flat"])?;
    let against_root = changetree_output(
        repository_dir.path(),
        &["tree", "--rev", "HEAD", "--parent", "HEAD~2", "--flat"],
    )?;

    assert_eq!(against_first_parent, "M  a/2.txt\n");
    assert_eq!(
        against_root,
        "M  1.txt\nM  a/2.txt\nD  a/b/3.txt\nA  c/4.txt\n"
    );

    Ok(())
}
