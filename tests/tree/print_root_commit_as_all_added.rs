use crate::common::command::{changetree_output, repository_with_two_commits, short_oid};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("HEAD~1")]
#[case("HEAD^")]
#[case("root")]
fn print_root_commit_as_all_added(
    repository_with_two_commits: TempDir,
    #[case] revision: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = repository_with_two_commits;
    let revision = match revision {
        "root" => short_oid(repository_dir.path(), "HEAD~1")?,
        revision => revision.to_string(),
    };

    let expected_output = "\
A  1.txt
A  a/
A    2.txt
A    b/
A      3.txt
";
    let actual_output = changetree_output(repository_dir.path(), &["tree", "--rev", &revision])?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
