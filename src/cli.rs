use clap::Parser;

#[derive(Parser)]
#[command(name = "fastdns")]
pub struct Args {
    /// Log level for diagnostic output
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
