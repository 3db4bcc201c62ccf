mod cli;
mod logging;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use ipcalc::output::print_report;
use std::process;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    logging::init().expect("Error initializing logging");

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            // Wrong argument count: usage goes to stdout, exit code 1
            print!("{}", cli::usage(&cli::program_name()));
            process::exit(1);
        }
    };

    match ipcalc::analyze(&args.cidr) {
        Ok(report) => print_report(&report),
        Err(err) => {
            log::error!("{}", err.to_string().red());
            process::exit(1);
        }
    }
}
