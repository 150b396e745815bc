use clap::Parser;

/// Daily time-band summary for phone call logs
#[derive(Parser, Debug)]
#[command(name = "calltally")]
#[command(version, about = "Daily time-band summary for phone call logs")]
pub struct Cli {
    /// Path of the phone call log file (use - for stdin)
    #[arg(short, long)]
    pub file: String,

    /// Enable verbose (debug) logging
    #[arg(long)]
    pub verbose: bool,
}
