use clap::Parser;
use stockroom::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The logger is configured from settings, so loading errors go to stderr.
    let (settings, environment) = match load_and_merge_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logger_from_settings(&settings)?;

    if let Err(e) = execute_command(&cli, settings, environment).await {
        tracing::error!(error = %format!("{:#}", e), "Command failed");
        return Err(e);
    }
    Ok(())
}
