//! `nlpf` command-line entry point.

use clap::Parser;
use nlpf_cli::cli::{Cli, Command};
use nlpf_cli::commands::{run_preprocess, run_stopwords};
use nlpf_cli::logging::init_logging;
use nlpf_cli::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Preprocess(args) => match run_preprocess(&args) {
            Ok(result) => {
                print_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Stopwords(args) => match run_stopwords(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}
