use crate::common::command::{changetree_output, init_repository_dir, run_git_command};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_flat_staging_changes(
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

    let untracked_dir = repository_dir.path().join("untracked");
    let untracked = write_generated_files(&untracked_dir, 3);

    let mut expected_output = " M a/2.txt\nA  a/b/staged.txt\n".to_string();
    for file in &untracked {
        let name = file.path.file_name().and_then(|name| name.to_str()).unwrap();
        expected_output.push_str(&format!(" ? untracked/{name}\n"));
    }

    let actual_output = changetree_output(repository_dir.path(), &["tree", "--flat"])?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
