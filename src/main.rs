//! Disease parameter converter CLI (workflow step 3B)
//!
//! # Usage
//!
//! ```bash
//! uq3b epidemiology.csv disease.csv
//! uq3b --force epidemiology.csv disease.csv
//! RUST_LOG=debug uq3b -f epidemiology.csv disease.csv
//! ```
//!
//! Reads the epidemiology matrix, derives disease parameters for every row
//! and writes them to the output file. The output is never overwritten unless
//! `--force` is given.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (output exists, file not found, unreadable input, malformed CSV, etc.)

use std::process;
use uq_disease_transform::cli;
use uq_disease_transform::transform::StagedSeirTransform;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args);

    let config = args.to_run_config();
    if args.force {
        println!("force option passed, disease matrix will be over-written if it exists");
    }

    match uq_disease_transform::run(&config, &StagedSeirTransform) {
        Ok(summary) => {
            println!("Done! See output at {}", summary.output.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
