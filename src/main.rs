use anyhow::Result;
use clap::Parser;
use fastdns::cli::Args;
use fastdns::enable_tracing;
use fastdns::flow::run_interactive;
use fastdns::network::NetworkSetup;
use nu_ansi_term::Color;

fn main() -> Result<()> {
    let args: Args = Args::parse();
    enable_tracing(&args.log_level);

    // Every handled failure prints one message and exits 0; a non-zero exit
    // only happens on an unhandled panic.
    match run_interactive(&NetworkSetup) {
        Ok(()) => {}
        Err(err) if err.is_cancellation() => {
            println!("{}", Color::Yellow.paint("Cancelled, nothing was changed."));
        }
        Err(err) => {
            eprintln!("{}", Color::Red.paint(err.to_string()));
        }
    }

    Ok(())
}
