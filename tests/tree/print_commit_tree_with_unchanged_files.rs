use crate::common::command::{changetree_output, repository_with_two_commits};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_commit_tree_with_unchanged_files(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = repository_with_two_commits;

    let expected_output = "\
M  1.txt
*  a/
     2.txt
D    b/
D      3.txt
A  c/
A    4.txt
";
    let actual_output = changetree_output(repository_dir.path(), &["tree", "--rev", "HEAD"])?;

    assert_eq!(actual_output, expected_output);

    let expected_flat_output = "M  1.txt\nD  a/b/3.txt\nA  c/4.txt\n";
    let actual_flat_output =
        changetree_output(repository_dir.path(), &["tree", "--rev", "@", "--flat"])?;

    assert_eq!(actual_flat_output, expected_flat_output);

    Ok(())
}
