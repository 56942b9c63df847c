mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, sweep};
use terminal::{logging, print};

/// Usage and fatal errors go to stdout, next to the results.
#[tokio::main]
async fn main() -> ExitCode {
    let commands = match CommandLine::parse_args() {
        Ok(commands) => commands,
        Err(e) => {
            print!("{e}");
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1));
        }
    };

    let range = match commands.range() {
        Ok(range) => range,
        Err(e) => {
            println!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let cfg = commands.config();
    logging::init_logging(cfg.quiet);
    print::banner(cfg.quiet);

    match sweep::sweep(range, commands.output, &cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
