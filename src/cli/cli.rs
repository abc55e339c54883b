use std::path::PathBuf;

use clap::Parser;

use crate::cli::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Maximum folder depth to descend into (overrides the preferences file)
    pub depth: Option<usize>,

    /// Include hidden entries
    #[clap(long, short)]
    pub all: bool,

    /// Colorize the printed tree
    #[clap(long, short)]
    pub color: bool,

    /// The root directory to scan
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_short_flags_parse() {
        let cli = Cli::parse_from(["twig", "-ac", "3"]);
        assert!(cli.all);
        assert!(cli.color);
        assert_eq!(cli.depth, Some(3));
    }

    #[test]
    fn defaults_apply_without_arguments() {
        let cli = Cli::parse_from(["twig"]);
        assert!(!cli.all);
        assert!(!cli.color);
        assert_eq!(cli.depth, None);
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(matches!(cli.log_level, LogLevel::Warn));
    }

    #[test]
    fn long_flags_parse() {
        let cli = Cli::parse_from(["twig", "--root", "/tmp", "--log-level", "debug"]);
        assert_eq!(cli.root, PathBuf::from("/tmp"));
        assert!(matches!(cli.log_level, LogLevel::Debug));
    }
}
