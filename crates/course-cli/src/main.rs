use clap::Parser;

use course_rpc::Status;

mod bootstrap;
mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        // Method failures keep the wire shape; everything else is a local error.
        if let Some(status) = error.downcast_ref::<Status>() {
            match serde_json::to_string(status) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("course error: {status}"),
            }
        } else {
            eprintln!("course error: {error:#}");
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    if let cli::Commands::Schema { message } = &cli.command {
        return commands::print_schema(*message, cli.format);
    }

    let config = bootstrap::load_config(&cli)?;
    init_tracing(cli.quiet, cli.verbose, &config.log.level)?;

    let handler = bootstrap::build_handler(&config).await?;
    commands::dispatch(cli.command, &handler, cli.format).await
}

fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("COURSE_LOG_FILTER")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
