use crate::common::command::{changetree_output, init_repository_dir};
use crate::common::file::delete_path;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_deleted_files_in_nested_folders(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    delete_path(&repository_dir.path().join("a").join("b"));

    let expected_output = concat!(
        " D a/\n",
        " D   b/\n",
        " D     3.txt\n",
    );
    let actual_output = changetree_output(repository_dir.path(), &["tree"])?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
