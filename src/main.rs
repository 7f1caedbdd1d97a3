use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    lectio::logging::init().context("init logging")?;

    let cli = lectio::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    let state = cli.state_path();
    match cli.command {
        lectio::cli::Command::Status(args) => {
            lectio::status::run(args, &state).context("status")?;
        }
        lectio::cli::Command::Toggle(args) => {
            lectio::track::toggle(args, &state).context("toggle")?;
        }
        lectio::cli::Command::Mark(args) => {
            lectio::track::mark(args, &state).context("mark")?;
        }
        lectio::cli::Command::Expand(args) => {
            lectio::track::expand(args, &state).context("expand")?;
        }
        lectio::cli::Command::Insight(args) => {
            lectio::panel::run(args).await.context("insight")?;
        }
    }

    Ok(())
}
