use crate::common::command::{changetree_output, init_repository_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_nothing_for_clean_working_tree(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    let tree_output = changetree_output(repository_dir.path(), &["tree"])?;
    let flat_output = changetree_output(repository_dir.path(), &["tree", "--flat"])?;

    assert_eq!(tree_output, "");
    assert_eq!(flat_output, "");

    Ok(())
}
