use crate::config::{OpenMode, RunConfig};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Transform a scaled epidemiology design into disease parameters
#[derive(Parser, Debug)]
#[command(name = "uq3b")]
#[command(
    about = "Transform a scaled epidemiology design into disease parameters",
    long_about = None
)]
pub struct CliArgs {
    /// Input epidemiology matrix
    #[arg(value_name = "INPUT", help = "Input epidemiology matrix (CSV)")]
    pub input: PathBuf,

    /// Output disease matrix
    #[arg(value_name = "OUTPUT", help = "Output disease matrix (CSV)")]
    pub output: PathBuf,

    /// Overwrite the output if it already exists
    #[arg(short = 'f', long = "force", help = "Force over-write")]
    pub force: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    /// Create a RunConfig from CLI arguments
    ///
    /// The `--force` flag selects `OpenMode::Truncate`; without it the output
    /// is created exclusively.
    pub fn to_run_config(&self) -> RunConfig {
        RunConfig::new(
            self.input.clone(),
            self.output.clone(),
            OpenMode::from_force(self.force),
        )
    }

    /// Default log level implied by `--verbose`
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::positional_only(&["uq3b", "in.csv", "out.csv"], false)]
    #[case::short_force(&["uq3b", "-f", "in.csv", "out.csv"], true)]
    #[case::long_force(&["uq3b", "in.csv", "out.csv", "--force"], true)]
    fn test_force_parsing(#[case] args: &[&str], #[case] expected: bool) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.input, PathBuf::from("in.csv"));
        assert_eq!(parsed.output, PathBuf::from("out.csv"));
        assert_eq!(parsed.force, expected);
    }

    #[rstest]
    #[case::exclusive(&["uq3b", "in.csv", "out.csv"], OpenMode::CreateExclusive)]
    #[case::truncate(&["uq3b", "--force", "in.csv", "out.csv"], OpenMode::Truncate)]
    fn test_run_config_conversion(#[case] args: &[&str], #[case] expected: OpenMode) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_run_config();

        assert_eq!(config.input, PathBuf::from("in.csv"));
        assert_eq!(config.output, PathBuf::from("out.csv"));
        assert_eq!(config.open_mode, expected);
    }

    #[rstest]
    #[case::quiet(&["uq3b", "in.csv", "out.csv"], LevelFilter::WARN)]
    #[case::info(&["uq3b", "-v", "in.csv", "out.csv"], LevelFilter::INFO)]
    #[case::debug(&["uq3b", "-vv", "in.csv", "out.csv"], LevelFilter::DEBUG)]
    #[case::trace(&["uq3b", "-vvvv", "in.csv", "out.csv"], LevelFilter::TRACE)]
    fn test_log_level(#[case] args: &[&str], #[case] expected: LevelFilter) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.log_level(), expected);
    }

    #[rstest]
    #[case::missing_both(&["uq3b"])]
    #[case::missing_output(&["uq3b", "in.csv"])]
    #[case::unknown_flag(&["uq3b", "--overwrite", "in.csv", "out.csv"])]
    #[case::extra_positional(&["uq3b", "in.csv", "out.csv", "more.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
