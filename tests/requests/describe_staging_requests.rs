use crate::common::command::{changetree_output, init_repository_dir, run_git_command, short_oid};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn describe_staging_requests(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let root = repository_dir.path().canonicalize()?;
    let head = short_oid(repository_dir.path(), "HEAD")?;

    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two, staged".to_string(),
    ));
    run_git_command(repository_dir.path(), &["add", "a/2.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("new.txt"),
        "new".to_string(),
    ));

    let staged = changetree_output(repository_dir.path(), &["requests", "a/2.txt", "--staged"])?;
    let unstaged = changetree_output(repository_dir.path(), &["requests", "a/2.txt"])?;
    let untracked = changetree_output(repository_dir.path(), &["requests", "new.txt"])?;
    let untracked_staged =
        changetree_output(repository_dir.path(), &["requests", "new.txt", "--staged"])?;

    assert_eq!(
        staged,
        format!("diff: commit {head} -> index\nblame: contents (11 bytes)\n")
    );
    assert_eq!(
        unstaged,
        format!(
            "diff: index -> workspace\nblame: workspace\nworking copy: {}\n",
            root.join("a").join("2.txt").display()
        )
    );
    assert_eq!(
        untracked,
        format!(
            "diff: empty -> workspace\nblame: workspace\nworking copy: {}\n",
            root.join("new.txt").display()
        )
    );
    assert_eq!(
        untracked_staged,
        format!("diff: commit {head} -> index\nblame: none\n")
    );

    Ok(())
}
