//! Argument parsing and command dispatch.

use std::time::Duration;

use anyhow::anyhow;
use clap::{Args, Parser, Subcommand, ValueEnum};
use postview_models::{DEFAULT_API_URL, Endpoints};
use postview_telemetry::{LogFormat, LoggingConfig, init_logging};
use reqwest::{Client, Url};

use crate::client::{AppContext, CliError, CliResult, parse_url};
use crate::commands::posts::{handle_post_list, handle_post_show};

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Parses CLI arguments, installs logging, and executes the requested
/// command. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format,
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err:#}");
    }

    match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            let exit_code = err.exit_code();
            let message = err.display_message();
            tracing::debug!(exit_code, "command failed");
            eprintln!("error: {message}");
            exit_code
        }
    }
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    let client = Client::builder()
        .timeout(Duration::from_secs(cli.timeout))
        .build()
        .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;

    let ctx = AppContext {
        client,
        endpoints: Endpoints::new(cli.api_url.as_str()),
    };

    match cli.command {
        Command::Posts(args) => handle_post_list(&ctx, args, cli.output).await,
        Command::Show(args) => handle_post_show(&ctx, args, cli.output).await,
    }
}

#[derive(Parser)]
#[command(name = "postview", about = "Browse posts, authors, and comments from the terminal")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "POSTVIEW_API_URL",
        value_parser = parse_url,
        default_value = DEFAULT_API_URL
    )]
    pub(crate) api_url: Url,
    #[arg(
        long,
        global = true,
        env = "POSTVIEW_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub(crate) timeout: u64,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        global = true,
        env = "POSTVIEW_LOG_LEVEL",
        default_value = postview_telemetry::DEFAULT_LOG_LEVEL
    )]
    pub(crate) log_level: String,
    #[arg(
        long,
        global = true,
        env = "POSTVIEW_LOG_FORMAT",
        default_value = "compact",
        value_parser = parse_log_format
    )]
    pub(crate) log_format: LogFormat,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// List posts.
    Posts(PostListArgs),
    /// Show a post together with its author and comments.
    Show(PostShowArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub(crate) struct PostListArgs {
    /// Only list posts written by this user id.
    #[arg(long)]
    pub(crate) user: Option<u64>,
    /// Stop after this many posts.
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct PostShowArgs {
    /// Post identifier.
    pub(crate) id: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    value.parse()
}
