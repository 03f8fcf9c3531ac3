use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use user_manager::cli::{Cli, Commands};
use user_manager::client::UserClient;
use user_manager::commands;
use user_manager::config::Config;
use user_manager::error::Result;
use user_manager::output;
use user_manager::screen::HomeScreen;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");

        if verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries table and JSON output only.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("user_manager={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    output::set_json_output(cli.json);
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't require config/client
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "users", &mut io::stdout());
        }
        Some(Commands::Init) => {
            commands::init::run()?;
        }
        // Commands that require config and client
        command => {
            let config = Config::load()?;
            let server_url = config.server_url(cli.server.as_deref())?;
            let client = UserClient::new(&server_url, config.timeout())?;
            let mask_emails = cli.mask_emails || config.mask_emails;

            match command {
                None | Some(Commands::App) => {
                    let mut screen = HomeScreen::new(client, mask_emails);
                    commands::app::run(&mut screen, io::stdin().lock(), io::stdout()).await?;
                }
                Some(Commands::Check) => {
                    commands::users::check(&client).await?;
                }
                Some(Commands::List) => {
                    commands::users::list(&client, mask_emails).await?;
                }
                Some(Commands::Show { id }) => {
                    commands::users::show(&client, id).await?;
                }
                Some(Commands::Add(args)) => {
                    commands::users::add(&client, args).await?;
                }
                Some(Commands::Delete { id }) => {
                    commands::users::delete(&client, id).await?;
                }
                Some(Commands::Completions { .. }) | Some(Commands::Init) => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
