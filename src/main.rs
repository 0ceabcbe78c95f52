use clap::Parser;

use symptom_checker_lib::cli::Cli;

fn main() {
    if let Err(error) = symptom_checker_lib::run(Cli::parse()) {
        eprintln!("symptom-checker error: {error}");
        std::process::exit(1);
    }
}
