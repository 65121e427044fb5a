use crate::common::command::{changetree_output, stash_repository_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_stash_tree_with_index_and_untracked_files(
    stash_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = stash_repository_dir;

    let expected_output = "\
MM 1.txt
 * a/
 M   2.txt
     b/
       3.txt
 ? u.txt
";
    let actual_output = changetree_output(repository_dir.path(), &["tree", "--stash", "0"])?;

    assert_eq!(actual_output, expected_output);

    let expected_flat_output = "MM 1.txt\n M a/2.txt\n ? u.txt\n";
    let actual_flat_output =
        changetree_output(repository_dir.path(), &["tree", "--stash", "0", "--flat"])?;

    assert_eq!(actual_flat_output, expected_flat_output);

    // the working tree was cleaned by the stash
    assert_eq!(changetree_output(repository_dir.path(), &["tree"])?, "");

    Ok(())
}
