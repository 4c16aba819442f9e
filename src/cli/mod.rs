// CLI module
// Command-line interface, argument parsing and log setup

mod args;

pub use args::CliArgs;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., missing arguments or --help), clap displays an
/// error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` directives are honored on top of the level implied by
/// `--verbose`.
pub fn init_logging(args: &CliArgs) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .init();
}
