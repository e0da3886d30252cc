//! Dispatches a parsed command to its handler.

use super::handlers::{CheckCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::{Environment, Settings};

/// Runs the command in `cli`; no subcommand means `serve`.
pub async fn execute_command(
    cli: &Cli,
    settings: Settings,
    environment: Environment,
) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) => {
            ServeCommandHandler::new(settings, environment)
                .execute(*dry_run)
                .await
        }
        None => ServeCommandHandler::new(settings, environment).execute(false).await,
        Some(Commands::Check) => CheckCommandHandler::new(settings).execute().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[tokio::test]
    async fn test_execute_serve_dry_run() {
        let cli = Cli::try_parse_from(["stockroom", "serve", "--dry-run"]).unwrap();
        let mut settings = Settings::default();
        settings.database.url = "postgres://localhost/inventory".to_string();
        settings.database.access_key = "key".to_string();

        assert!(execute_command(&cli, settings, Environment::Test).await.is_ok());
    }
}
