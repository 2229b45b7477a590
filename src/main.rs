use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use transplant::areas::repository::Repository;
use transplant::artifacts::revision::{DEFAULT_BASE_REF, Revision};

const USAGE_EXIT_CODE: i32 = 1;

#[derive(Parser)]
#[command(
    name = "transplant",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Copy the files changed on one branch onto another branch",
    long_about = "This command lists the files that differ between the base reference and \
    SOURCE, reads their content straight from git without checking SOURCE out, \
    asks for confirmation, then checks out TARGET and overwrites those files there. \
    Nothing is committed; the copied files show up as local changes on TARGET.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The branch whose changed files are copied")]
    source: String,
    #[arg(index = 2, help = "The branch the files are written onto")]
    target: String,
    #[arg(
        short,
        long,
        env = "TRANSPLANT_BASE",
        default_value = DEFAULT_BASE_REF,
        help = "The reference SOURCE is diffed against to find changed files"
    )]
    base: String,
    #[arg(
        short = 'C',
        long = "directory",
        help = "Run as if started in this directory"
    )]
    directory: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // help and version go to stdout and are not failures
            let code = if err.use_stderr() { USAGE_EXIT_CODE } else { 0 };
            err.print()?;
            std::process::exit(code);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("transplant=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let source = Revision::try_parse(&cli.source)?;
    let target = Revision::try_parse(&cli.target)?;
    let base = Revision::try_parse(&cli.base)?;

    let directory = match cli.directory {
        Some(directory) => directory,
        None => std::env::current_dir()?,
    };
    let mut repository = Repository::new(&directory, Box::new(std::io::stdout()))?;

    let outcome = repository.transplant(&source, &target, &base, &mut std::io::stdin().lock())?;
    tracing::debug!(?outcome, "transplant finished");

    Ok(())
}
