//! Merges CLI overrides on top of file and environment configuration.
//!
//! Precedence, lowest first: `default.toml`, `{env}.toml`, `local.toml`,
//! `STOCKROOM_*` variables, command-line flags.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Environment, Settings};

pub struct ConfigurationMerger {
    base_config: Settings,
    environment: Environment,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings, environment: Environment) -> Self {
        Self {
            base_config,
            environment,
        }
    }

    /// Loads the base configuration selected by `--config` and `--env`.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = ConfigLoader::new()?;
        if let Some(env) = cli.env {
            loader = loader.with_environment(env.into());
        }
        if let Some(path) = &cli.config {
            loader = loader.with_config_file(path);
        }

        tracing::debug!(
            environment = %loader.environment(),
            config_dir = %loader.config_dir().display(),
            "Loading configuration"
        );

        let environment = loader.environment();
        Ok(Self::new(loader.load()?, environment))
    }

    /// Applies flag overrides and validates the result.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve {
            host,
            port,
            log_level,
            ..
        }) = &cli.command
        {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
            // Per-command level wins over the global flags.
            if let Some(level) = log_level {
                config.logger.level = level.as_str().to_string();
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::tests::{DEFAULT_TOML, ENV_MUTEX, EnvGuard, setup_config_dir};
    use clap::Parser;

    fn valid_base_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/inventory".to_string();
        config.database.access_key = "key".to_string();
        config
    }

    fn merge(args: &[&str]) -> Settings {
        let merger = ConfigurationMerger::new(valid_base_config(), Environment::Test);
        let cli = Cli::try_parse_from(args).unwrap();
        merger.merge_cli_args(&cli).unwrap()
    }

    #[test]
    fn test_verbose_and_quiet_flags() {
        assert_eq!(merge(&["stockroom", "--verbose"]).logger.level, "debug");
        assert_eq!(merge(&["stockroom", "--quiet"]).logger.level, "error");
    }

    #[test]
    fn test_serve_overrides_host_and_port() {
        let merged = merge(&["stockroom", "serve", "--host", "0.0.0.0", "--port", "8080"]);
        assert_eq!(merged.server.host, "0.0.0.0");
        assert_eq!(merged.server.port, 8080);
    }

    #[test]
    fn test_command_log_level_overrides_global() {
        let merged = merge(&["stockroom", "--verbose", "serve", "--log-level", "warn"]);
        assert_eq!(merged.logger.level, "warn");
    }

    #[test]
    fn test_merge_revalidates() {
        let merger = ConfigurationMerger::new(Settings::default(), Environment::Test);
        let cli = Cli::try_parse_from(["stockroom", "check"]).unwrap();
        let err = merger.merge_cli_args(&cli).unwrap_err();
        assert_eq!(err.field(), Some("database.url"));
    }

    #[test]
    fn test_from_cli_applies_env_flag() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|p| p.into_inner());
        let mut env = EnvGuard::clean();

        let dir = setup_config_dir(&[
            ("default.toml", DEFAULT_TOML),
            ("staging.toml", "[server]\nport = 4100\n"),
        ]);
        env.set(
            crate::config::loader::CONFIG_DIR_ENV,
            dir.path().to_str().unwrap(),
        );

        let cli = Cli::try_parse_from(["stockroom", "--env", "staging", "check"]).unwrap();
        let merger = ConfigurationMerger::from_cli(&cli).unwrap();
        assert_eq!(merger.environment(), Environment::Staging);
        assert_eq!(merger.merge_cli_args(&cli).unwrap().server.port, 4100);
    }

    #[test]
    fn test_from_cli_reads_config_file() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|p| p.into_inner());
        let _env = EnvGuard::clean();

        let dir = setup_config_dir(&[("custom.toml", DEFAULT_TOML)]);
        let path = dir.path().join("custom.toml");

        let cli = Cli::try_parse_from(["stockroom", "--config", path.to_str().unwrap(), "check"])
            .unwrap();
        let merger = ConfigurationMerger::from_cli(&cli).unwrap();
        assert_eq!(merger.merge_cli_args(&cli).unwrap().database.access_key, "file-key");
    }
}
