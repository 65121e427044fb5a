use crate::common::command::{changetree_output, init_repository_dir, run_git_command};
use crate::common::file::{FileSpec, delete_path, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_staged_and_unstaged_modifications(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one, staged".to_string(),
    ));
    run_git_command(repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one, staged and changed again".to_string(),
    ));
    run_git_command(repository_dir.path(), &["rm", "--quiet", "a/2.txt"])
        .assert()
        .success();
    delete_path(&repository_dir.path().join("a").join("b").join("3.txt"));

    let expected_output = "MM 1.txt\nD  a/2.txt\n D a/b/3.txt\n";
    let actual_output = changetree_output(repository_dir.path(), &["tree", "--flat"])?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
