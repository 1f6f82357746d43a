use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "build-test-app",
    version,
    about = "Print build metadata and run pipeline smoke checks"
)]
pub struct Cli {
    /// Enable verbose output (diagnostics on stderr)
    #[arg(long)]
    pub verbose: bool,

    /// Print the report as JSON instead of status lines
    #[arg(long)]
    pub json: bool,
}
