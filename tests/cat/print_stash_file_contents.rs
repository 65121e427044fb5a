use crate::common::command::{changetree_output, stash_repository_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(&["cat", "--stash", "0", "1.txt", "--staged"], "one, stashed")]
#[case(&["cat", "--stash", "0", "a/2.txt", "--staged"], "two")]
#[case(&["cat", "--stash", "0", "a/2.txt"], "two, stashed")]
#[case(&["cat", "--stash", "0", "u.txt"], "untracked")]
#[case(&["cat", "--rev", "stash@{0}", "a/2.txt"], "two, stashed")]
fn print_stash_file_contents(
    stash_repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual = changetree_output(stash_repository_dir.path(), args)?;

    assert_eq!(actual, expected);

    Ok(())
}
