use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use ti::config::Config;
use ti::ui::message;

mod cmd;

#[derive(Parser)]
#[command(name = "ti")]
#[command(
    version,
    about = "Convert TODO comments in your code into GitHub issues",
    long_about = "Finds every TODO comment under DIR and walks you through each one: \
                  open it as an issue in this repository's GitHub project, skip it, \
                  or stop."
)]
pub struct Cli {
    /// Directory to scan for TODO comments. Directories named in
    /// `scan.skip_dirs` of .ti.toml (default: .git) are not descended into
    pub dir: PathBuf,

    /// GitHub token used to open issues (defaults to $GITHUB_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Print the TODOs that were found and exit without triage
    #[arg(long)]
    pub list: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "ti=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let project_dir = std::env::current_dir().context("Failed to get current directory")?;
    let config = Config::new(project_dir.clone(), cli.dir, cli.token, cli.verbose)?;
    for warning in config.validate() {
        tracing::warn!("{}", warning);
    }

    if cli.list {
        cmd::cmd_list(&config)
    } else {
        cmd::cmd_triage(&config, &project_dir).await
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "fatal");
            message::print_error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
