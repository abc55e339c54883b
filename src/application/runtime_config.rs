use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::Preferences;

/// Built-in fallback when neither the CLI nor the preferences file set a
/// depth.
const DEFAULT_MAX_DEPTH: usize = 2;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    pub show_hidden: bool,
    pub color: bool,
    pub max_depth: usize,
}

impl RuntimeConfig {
    /// Explicit CLI arguments win over preferences file values, which win
    /// over the built-in defaults.
    pub fn merge(cli: Cli, preferences: Preferences) -> Self {
        Self {
            root: cli.root,
            show_hidden: cli.all || preferences.all.unwrap_or(false),
            color: cli.color || preferences.color.unwrap_or(false),
            max_depth: cli.depth.or(preferences.depth).unwrap_or(DEFAULT_MAX_DEPTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::cli::LogLevel;

    fn cli(depth: Option<usize>, all: bool, color: bool) -> Cli {
        Cli {
            depth,
            all,
            color,
            root: PathBuf::from("."),
            log_level: LogLevel::Warn,
        }
    }

    #[rstest]
    #[case(Some(5), Some(1), 5)]
    #[case(None, Some(1), 1)]
    #[case(None, None, 2)]
    fn depth_precedence(
        #[case] cli_depth: Option<usize>,
        #[case] preference_depth: Option<usize>,
        #[case] expected: usize,
    ) {
        let preferences = Preferences {
            depth: preference_depth,
            ..Preferences::default()
        };
        let config = RuntimeConfig::merge(cli(cli_depth, false, false), preferences);
        assert_eq!(config.max_depth, expected);
    }

    #[rstest]
    #[case(false, None, false)]
    #[case(false, Some(true), true)]
    #[case(false, Some(false), false)]
    #[case(true, None, true)]
    fn hidden_flag_precedence(
        #[case] cli_all: bool,
        #[case] preference_all: Option<bool>,
        #[case] expected: bool,
    ) {
        let preferences = Preferences {
            all: preference_all,
            ..Preferences::default()
        };
        let config = RuntimeConfig::merge(cli(None, cli_all, false), preferences);
        assert_eq!(config.show_hidden, expected);
    }

    #[rstest]
    #[case(false, Some(true), true)]
    #[case(true, Some(false), true)]
    #[case(false, None, false)]
    fn color_flag_precedence(
        #[case] cli_color: bool,
        #[case] preference_color: Option<bool>,
        #[case] expected: bool,
    ) {
        let preferences = Preferences {
            color: preference_color,
            ..Preferences::default()
        };
        let config = RuntimeConfig::merge(cli(None, false, cli_color), preferences);
        assert_eq!(config.color, expected);
    }
}
