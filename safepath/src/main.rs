use std::io;
use std::process::ExitCode;

use clap::Parser;
use safepath_lib::{Cli, Config, init_logging, run};

fn main() -> ExitCode {
    let config = Config::from(Cli::parse());
    init_logging(config.log_level);

    match run(&config, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
