use crate::common::file::{FileSpec, delete_path, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use derive_new::new;
use rstest::fixture;
use std::path::Path;

const FIXED_DATE: &str = "2023-01-01 12:00:00 +0000"; // %Y-%m-%d %H:%M:%S %z

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository with one commit holding `1.txt`, `a/2.txt` and `a/b/3.txt`.
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_git_command(repository_dir.path(), &["init", "--quiet"])
        .assert()
        .success();

    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    let file3 = FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    );
    write_file(file3);

    git_add_all(repository_dir.path());
    git_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

/// `init_repository_dir` plus a second commit that modifies `1.txt`, deletes
/// `a/b/3.txt` and adds `c/4.txt`.
#[fixture]
pub fn repository_with_two_commits(init_repository_dir: TempDir) -> TempDir {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one, revised".to_string(),
    ));
    delete_path(&repository_dir.path().join("a").join("b").join("3.txt"));
    write_file(FileSpec::new(
        repository_dir.path().join("c").join("4.txt"),
        "four".to_string(),
    ));

    git_add_all(repository_dir.path());
    git_commit(repository_dir.path(), "Second commit")
        .assert()
        .success();

    repository_dir
}

/// `init_repository_dir` after `git stash --include-untracked` of a staged
/// `1.txt`, an unstaged `a/2.txt` and an untracked `u.txt`.
#[fixture]
pub fn stash_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one, stashed".to_string(),
    ));
    run_git_command(repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two, stashed".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("u.txt"),
        "untracked".to_string(),
    ));

    run_git_command(
        repository_dir.path(),
        &["stash", "push", "--include-untracked", "--quiet"],
    )
    .assert()
    .success();

    repository_dir
}

pub fn run_changetree_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("changetree").expect("Failed to find changetree binary");
    cmd.envs(vec![("CHANGETREE_LOG", "off"), ("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    cmd.args(["--color", "never"]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Stdout of a successful changetree run
pub fn changetree_output(dir: &Path, args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_changetree_command(dir, args).assert().success();
    let stdout = output.get_output().stdout.clone();

    Ok(String::from_utf8(stdout)?)
}

/// git with a random identity, fixed dates and no user or system configuration
pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let author = generate_random_author();

    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    cmd.envs(vec![
        ("GIT_CONFIG_NOSYSTEM", "1".to_string()),
        ("GIT_CONFIG_GLOBAL", "/dev/null".to_string()),
        ("GIT_AUTHOR_NAME", author.name.clone()),
        ("GIT_AUTHOR_EMAIL", author.email.clone()),
        ("GIT_AUTHOR_DATE", FIXED_DATE.to_string()),
        ("GIT_COMMITTER_NAME", author.name),
        ("GIT_COMMITTER_EMAIL", author.email),
        ("GIT_COMMITTER_DATE", FIXED_DATE.to_string()),
    ]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

#[derive(Debug, Clone, new)]
struct RandomAuthor {
    name: String,
    email: String,
}

fn generate_random_author() -> RandomAuthor {
    use fake::Fake;
    use fake::faker::internet::en::FreeEmail;
    use fake::faker::name::en::Name;

    let name = Name().fake::<String>().replace(" ", "_");
    let email = FreeEmail().fake::<String>();
    RandomAuthor::new(name, email)
}

pub fn git_add_all(dir: &Path) {
    run_git_command(dir, &["add", "--all"]).assert().success();
}

pub fn git_commit(dir: &Path, message: &str) -> Command {
    run_git_command(dir, &["commit", "--quiet", "--no-gpg-sign", "-m", message])
}

/// Full id of a revision, as git resolves it
pub fn git_rev_parse(dir: &Path, revision: &str) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_git_command(dir, &["rev-parse", revision]).output()?;
    if !output.status.success() {
        return Err(format!("git rev-parse {revision} failed").into());
    }

    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

/// Abbreviated id in the form changetree prints
pub fn short_oid(dir: &Path, revision: &str) -> Result<String, Box<dyn std::error::Error>> {
    Ok(git_rev_parse(dir, revision)?[..7].to_string())
}
