//! cborint Binary Entry Point
//!
//! Parses the command line, installs the logger and runs one command.

use std::process;

use clap::Parser;
use frameworks_cbor_int_cli::{init_logging, run, CliArgs};
use log::error;

fn main() {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match run(&args.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("{:?} failed: {}", args.command, e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
