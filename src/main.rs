use std::process::ExitCode;

use clap::Parser;
use prioheap::command::HeapOrder;
use prioheap::runtime::{self, Commands, Config};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    // trace, debug, info, warn, error or off
    #[arg(long, global = true, default_value = "warn")]
    log_level: runtime::LogLevel,

    // Which end sits at the root: max or min
    #[arg(long, global = true, default_value = "max")]
    order: HeapOrder,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let mut cli = Cli::parse();

    if let Err(e) = runtime::setup_global_logger(cli.log_level) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let config = Config {
        log_level: cli.log_level,
        order: cli.order,
    };
    if let Err(e) = Config::init(config) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    log::debug!("Executing {:?}", cli.command);
    if let Err(e) = cli.command.try_execute() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    return ExitCode::SUCCESS;
}
