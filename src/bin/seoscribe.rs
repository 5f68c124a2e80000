//! `seoscribe`: score content for SEO and readability from the command line.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;

use seoscribe::cli::args::SeoscribeArgs;
use seoscribe::cli::commands::execute_command;

fn main() {
    let args = SeoscribeArgs::parse();

    Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("seoscribe: {e}");
        process::exit(1);
    }
}
