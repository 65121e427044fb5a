use anyhow::Result;
use changetree::areas::repository::Repository;
use changetree::commands::porcelain::tree::TreeOptions;
use changetree::{ColorMode, Selection};
use clap::{Args, Parser, Subcommand};
use is_terminal::IsTerminal;
use std::path::PathBuf;

const LOG_ENV: &str = "CHANGETREE_LOG";

#[derive(Parser)]
#[command(
    name = "changetree",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Show the change tree of a commit, a stash or the staging area",
    long_about = "Builds one sorted tree of folders and files for a git selection. \
    Every line carries the staged and unstaged status of its node, \
    folders summarizing the files below them.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        short = 'C',
        global = true,
        default_value = ".",
        help = "Run as if started in this directory"
    )]
    directory: PathBuf,
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = ColorMode::Auto,
        help = "When to color status codes"
    )]
    color: ColorMode,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct SelectionArgs {
    #[arg(long, conflicts_with = "stash", help = "Show this commit instead of the staging area")]
    rev: Option<String>,
    #[arg(
        long,
        requires = "rev",
        help = "Compare the commit with this revision instead of its first parent"
    )]
    parent: Option<String>,
    #[arg(long, value_name = "N", help = "Show stash@{N} instead of the staging area")]
    stash: Option<usize>,
}

impl SelectionArgs {
    fn selection(&self) -> Selection {
        match (&self.rev, self.stash) {
            (Some(revision), _) => Selection::Commit {
                revision: revision.clone(),
                parent: self.parent.clone(),
            },
            (None, Some(position)) => Selection::Stash(position),
            (None, None) => Selection::Staging,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "tree",
        about = "Print the change tree",
        long_about = "Prints every folder and file of the selection with its staged and \
        unstaged status codes. Commits list their whole tree, unchanged files included."
    )]
    Tree {
        #[command(flatten)]
        selection: SelectionArgs,
        #[arg(long, help = "Print changed files with full paths instead of the tree")]
        flat: bool,
        #[arg(long, help = "Include ignored files in the staging area")]
        ignored: bool,
    },
    #[command(
        name = "cat",
        about = "Print the contents of a file",
        long_about = "Prints the bytes of the unstaged side of a file, \
        or of the staged side with --staged."
    )]
    Cat {
        #[command(flatten)]
        selection: SelectionArgs,
        #[arg(index = 1, help = "Repository-relative path of the file")]
        path: String,
        #[arg(long, help = "Read the staged side")]
        staged: bool,
    },
    #[command(
        name = "requests",
        about = "Print the diff and blame requests for a file",
        long_about = "Prints which two versions of a file a diff compares and where blame starts, \
        for the unstaged side or, with --staged, the staged side."
    )]
    Requests {
        #[command(flatten)]
        selection: SelectionArgs,
        #[arg(index = 1, help = "Repository-relative path of the file")]
        path: String,
        #[arg(long, help = "Describe the staged side")]
        staged: bool,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn init_color(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        // colored already honours NO_COLOR and CLICOLOR on its own
        ColorMode::Auto if !std::io::stdout().is_terminal() => {
            colored::control::set_override(false)
        }
        ColorMode::Auto => {}
    }
}

fn run(cli: Cli) -> Result<()> {
    let repository = Repository::discover(&cli.directory, Box::new(std::io::stdout()))?;

    match cli.command {
        Commands::Tree {
            selection,
            flat,
            ignored,
        } => repository
            .with_ignored(ignored)
            .tree(&selection.selection(), &TreeOptions::new(flat))?,
        Commands::Cat {
            selection,
            path,
            staged,
        } => repository.cat(&selection.selection(), &path, staged)?,
        Commands::Requests {
            selection,
            path,
            staged,
        } => repository.requests(&selection.selection(), &path, staged)?,
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();
    init_color(cli.color);

    // repository reads are blocking file IO
    tokio::task::spawn_blocking(move || run(cli)).await?
}
