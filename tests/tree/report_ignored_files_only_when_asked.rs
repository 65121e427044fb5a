use crate::common::command::{changetree_output, git_add_all, git_commit, init_repository_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_ignored_files_only_when_asked(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join(".gitignore"),
        "*.log\nbuild/\n".to_string(),
    ));
    git_add_all(repository_dir.path());
    git_commit(repository_dir.path(), "Ignore logs").assert().success();

    write_file(FileSpec::new(
        repository_dir.path().join("debug.log"),
        "log line".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("build").join("out.bin"),
        "binary".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("notes.txt"),
        "notes".to_string(),
    ));

    let default_output = changetree_output(repository_dir.path(), &["tree", "--flat"])?;
    let ignored_output =
        changetree_output(repository_dir.path(), &["tree", "--flat", "--ignored"])?;

    assert_eq!(default_output, " ? notes.txt\n");
    assert_eq!(ignored_output, " ! build/out.bin\n ! debug.log\n ? notes.txt\n");

    Ok(())
}
