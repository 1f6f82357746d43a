mod check;
mod cli;
mod config;
mod report;
mod types;

use clap::Parser;
use cli::Cli;
use config::BuildEnv;
use types::Report;

fn main() {
    let cli = Cli::parse();

    let env = BuildEnv::from_env();
    let checks = check::run_checks(&env);
    let report = Report::new(env, checks);

    if cli.verbose {
        report::print_diagnostics(&report);
    }

    let printed = if cli.json {
        report::print_json(&report)
    } else {
        report::print_text(&report)
    };
    if let Err(e) = printed {
        eprintln!("Error: {e:#}");
        std::process::exit(2);
    }

    std::process::exit(report.exit_code());
}
