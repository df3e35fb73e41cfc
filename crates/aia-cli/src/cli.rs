//! Command-line arguments for `aia-materializer`.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use aia_cli::logging::{LogConfig, LogFormat};
use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "aia-materializer",
    version,
    about = "Generate and package the Digital Garden App Inventor project",
    long_about = "Generate the App Inventor sources for the Digital Garden controller and \
                  package them as an .aia archive.\n\n\
                  Without a subcommand the full generate-and-package sequence runs for \
                  the current directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Repository root holding the `app_inventor/` directory (default: current directory).
    #[arg(long = "repo-root", value_name = "DIR", global = true)]
    pub repo_root: Option<PathBuf>,

    /// Skip the git merge-conflict check.
    #[arg(long = "no-conflict-check", global = true)]
    pub no_conflict_check: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machines).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// `--log-level` beats `-v`/`-q`; `RUST_LOG` applies only when neither is given.
    pub fn log_config(&self) -> LogConfig {
        let explicit = self.log_level.map(LogLevelArg::filter);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            level_filter: explicit.unwrap_or_else(|| self.verbosity.tracing_level_filter()),
            use_env_filter: explicit.is_none() && !self.verbosity.is_present(),
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
            with_ansi,
            ..LogConfig::default()
        }
    }
}

#[derive(Debug, Clone, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Regenerate every project file and rebuild the archive (default).
    Generate,

    /// Rebuild the archive from the descriptors already on disk.
    Package,

    /// List the members of an archive with their sizes and SHA-256 digests.
    Inspect(InspectArgs),
}

#[derive(Debug, Clone, Parser, PartialEq, Eq)]
pub struct InspectArgs {
    /// Archive to inspect (default: the project's archive).
    #[arg(value_name = "ARCHIVE")]
    pub archive: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    fn filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_default_run() {
        let cli = Cli::try_parse_from(["aia-materializer"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(!cli.no_conflict_check);
        assert!(cli.repo_root.is_none());
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from([
            "aia-materializer",
            "package",
            "--no-conflict-check",
            "--repo-root",
            "/tmp/repo",
        ])
        .expect("parse");
        assert_eq!(cli.command, Some(Command::Package));
        assert!(cli.no_conflict_check);
        assert_eq!(cli.repo_root, Some(PathBuf::from("/tmp/repo")));
    }

    #[test]
    fn default_logging_defers_to_rust_log() {
        let config = Cli::try_parse_from(["aia-materializer"])
            .expect("parse")
            .log_config();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn verbosity_flags_pin_the_level() {
        let config = Cli::try_parse_from(["aia-materializer", "-v"])
            .expect("parse")
            .log_config();
        assert_eq!(config.level_filter, LevelFilter::INFO);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn explicit_level_wins_over_verbosity() {
        let config = Cli::try_parse_from([
            "aia-materializer",
            "-q",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--color",
            "never",
        ])
        .expect("parse")
        .log_config();
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.with_ansi);
    }

    #[test]
    fn inspect_takes_an_optional_archive() {
        let cli = Cli::try_parse_from(["aia-materializer", "inspect", "out.aia"]).expect("parse");
        assert_eq!(
            cli.command,
            Some(Command::Inspect(InspectArgs {
                archive: Some(PathBuf::from("out.aia"))
            }))
        );
    }
}
