use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::RuntimeConfig;
use crate::cli::Cli;
use crate::config::Preferences;
use crate::config::PreferencesError;
use crate::scanner::DirectoryScanner;
use crate::scanner::ScanError;
use crate::tree::PathTree;

pub struct Application;

impl Application {
    pub fn run(cli: Cli) -> Result<(), ApplicationError> {
        let preferences = Preferences::read(&cli.root).context(ConfigSnafu)?;
        debug!("Loaded preferences: {:?}", preferences);

        let config = RuntimeConfig::merge(cli, preferences);
        debug!("Effective configuration: {:?}", config);

        let mut tree = PathTree::new();
        DirectoryScanner::new(config.show_hidden, config.max_depth)
            .scan(&config.root, &mut tree)
            .context(ScanningSnafu)?;

        let colorize =
            config.color && supports_color::on(supports_color::Stream::Stdout).is_some();
        if colorize {
            colored::control::set_override(true);
        }
        tree.describe(true, colorize);

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered during configuration stage"))]
    ConfigError { source: PreferencesError },
    #[snafu(display("Critical failure encountered while scanning the directory tree"))]
    ScanningError { source: ScanError },
}
