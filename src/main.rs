use anyhow::Result;
use clap::Parser;
use git_open_modified::commands::open_modified::open_modified;
use git_open_modified::domain::areas::editor::CliEditor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "git-open-modified",
    version = "0.1.0",
    about = "Open every file with unstaged modifications",
    long_about = "This command locates the Git working directory closest to the \
    current project context and opens each file reported as modified in the \
    working tree, the way an editor's 'open all modified files' action would.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long = "folder",
        value_name = "DIR",
        help = "An open project folder; may be repeated, order is preserved"
    )]
    folders: Vec<PathBuf>,

    #[arg(
        long,
        value_name = "FILE",
        help = "The file currently focused in the editor"
    )]
    active_file: Option<PathBuf>,

    #[arg(
        long,
        value_name = "COMMAND",
        help = "Command used to open each modified file; paths are printed when omitted"
    )]
    editor: Option<String>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("git_open_modified=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    // no --folder behaves like an editor with the current directory open
    let folders = if cli.folders.is_empty() {
        vec![std::env::current_dir()?]
    } else {
        cli.folders
    };

    let mut editor = CliEditor::new(
        folders,
        cli.active_file,
        cli.editor,
        Box::new(std::io::stdout()),
    );

    open_modified(&mut editor)
}
