use std::process::ExitCode;

use clap::Parser;

use boardscope::app;
use boardscope::cli::CliArgs;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    boardscope::tracing::init();
    app::run(args)
}
