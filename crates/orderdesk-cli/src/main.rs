//! CLI entry point.
//!
//! Wiring happens in `bootstrap`; this file sets up logging, parses the
//! command line and dispatches to handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use orderdesk_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.as_ref() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(CliConfig::from_cli(&cli)).await?;

    match command {
        Commands::Login { phone } => handlers::login::execute(&ctx, phone).await?,
        Commands::Logout => handlers::logout::execute(&ctx).await?,
        Commands::Status { json } => handlers::status::execute(&ctx, *json)?,
        Commands::Orders => handlers::orders::execute(&ctx).await?,
        Commands::Order { id } => handlers::orders::show(&ctx, id).await?,
        Commands::Speak { text, lang } => {
            handlers::speak::execute(&ctx, text, lang.as_deref()).await?;
        }
        Commands::Announce { target } => handlers::announce::execute(&ctx, target.clone()).await?,
        Commands::Language { code } => handlers::language::execute(&ctx, code.as_deref()).await?,
        Commands::Languages => handlers::language::list(&ctx)?,
        Commands::Voices => handlers::speak::voices(&ctx).await?,
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables before RUST_LOG is read
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
