use clap::Parser;

use regexp_guard::cli::{Cli, Commands};
use regexp_guard::commands::{run_check, run_config, run_init};
use regexp_guard::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet, logging::use_ansi(cli.color));

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}
