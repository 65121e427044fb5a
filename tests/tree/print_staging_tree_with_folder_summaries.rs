use crate::common::command::{changetree_output, init_repository_dir, run_git_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_staging_tree_with_folder_summaries(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two, changed".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("staged.txt"),
        "staged".to_string(),
    ));
    run_git_command(repository_dir.path(), &["add", "a/b/staged.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("new.txt"),
        "new".to_string(),
    ));

    let expected_output = "\
** a/
 M   2.txt
A    b/
A      staged.txt
 ? new.txt
";
    let actual_output = changetree_output(repository_dir.path(), &["tree"])?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
