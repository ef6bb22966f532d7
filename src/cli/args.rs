//! CLI argument definitions for `semyear`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use semester_year::config::ConfigOverrides;
use semester_year::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts
/// to lowercase strings for config storage and to `logger::Level` for
/// runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `long_names`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show a semester/year term.
    ///
    /// Parses a short-format term like `H-2024` (or `V-99`, which is
    /// normalized to spring 2099) and prints its components.
    Show {
        /// Term in short format, e.g. `H-2024`
        #[arg(value_name = "TERM")]
        term: String,
    },
    /// Step a term forward by one or more semesters.
    Next {
        /// Term in short format, e.g. `V-2024`
        #[arg(value_name = "TERM")]
        term: String,

        /// Number of semesters to step forward
        #[arg(short = 'n', long = "steps", value_name = "STEPS", default_value_t = 1)]
        steps: u32,
    },
    /// Step a term backward by one or more semesters.
    Prev {
        /// Term in short format, e.g. `V-2024`
        #[arg(value_name = "TERM")]
        term: String,

        /// Number of semesters to step backward
        #[arg(short = 'n', long = "steps", value_name = "STEPS", default_value_t = 1)]
        steps: u32,
    },
    /// Compare two terms chronologically.
    Compare {
        /// First term in short format
        #[arg(value_name = "TERM_A")]
        a: String,

        /// Second term in short format
        #[arg(value_name = "TERM_B")]
        b: String,
    },
    /// List every semester between two terms, inclusive.
    Range {
        /// Start term in short format
        #[arg(value_name = "FROM")]
        from: String,

        /// End term in short format
        #[arg(value_name = "TO")]
        to: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "semyear",
    about = "semester-and-year command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config long-names display flag (true/false)
    #[arg(long = "long-names", value_parser = BoolishValueParser::new())]
    pub long_names: Option<bool>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can
    /// be applied to the loaded configuration for the current run, where
    /// `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            long_names: self.long_names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            long_names: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = base_cli(Command::Config { subcommand: None });

        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.long_names.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = base_cli(Command::Config { subcommand: None });
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.long_names = Some(true);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.long_names, Some(true));
    }

    #[test]
    fn test_parse_next_with_steps() {
        let cli = Cli::try_parse_from(["semyear", "next", "V-2024", "-n", "3"]).unwrap();
        match cli.command {
            Command::Next { term, steps } => {
                assert_eq!(term, "V-2024");
                assert_eq!(steps, 3);
            }
            other => panic!("expected Next, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_steps_defaults_to_one() {
        let cli = Cli::try_parse_from(["semyear", "prev", "H-2023"]).unwrap();
        match cli.command {
            Command::Prev { steps, .. } => assert_eq!(steps, 1),
            other => panic!("expected Prev, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_steps_rejected_at_parse() {
        assert!(Cli::try_parse_from(["semyear", "next", "V-2024", "-n", "-2"]).is_err());
    }
}
