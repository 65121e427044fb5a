use crate::common::command::{init_repository_dir, run_changetree_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case(&["tree", "--rev", "no-such-branch"], "Unable to select commit no-such-branch")]
#[case(
    &["tree", "--rev", "HEAD", "--parent", "nope"],
    "Unable to select the parent to compare with"
)]
#[case(&["tree", "--stash", "0"], "stash@{0} does not exist")]
fn reject_unknown_selections(
    init_repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    run_changetree_command(repository_dir.path(), args)
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));

    Ok(())
}

#[rstest]
fn reject_parent_without_revision(init_repository_dir: TempDir) {
    run_changetree_command(init_repository_dir.path(), &["tree", "--parent", "HEAD"])
        .assert()
        .failure();
}
