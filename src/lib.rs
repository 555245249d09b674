pub mod cli;
pub mod constants;
pub mod error;
pub mod flow;
pub mod network;
pub mod prompt;
pub mod utils;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// Enables tracing for the application.
///
/// ### Arguments
/// - `log_level` - the log level to use
pub fn enable_tracing(log_level: &str) {
    let registry = tracing_subscriber::Registry::default();
    let fmt_layer = tracing_subscriber::fmt::Layer::new().with_writer(std::io::stderr);
    let filter_layer = EnvFilter::try_new(log_level).unwrap();

    let subscriber = registry.with(filter_layer).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber).unwrap();
}
