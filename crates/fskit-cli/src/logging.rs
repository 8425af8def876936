use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global tracing subscriber.
///
/// `--verbose` forces DEBUG output. Otherwise `RUST_LOG` decides, defaulting
/// to warnings only. Logs go to stderr so command output stays clean.
pub fn init(verbose: bool) {
    let result = if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    if result.is_ok() && verbose {
        tracing::debug!("Verbose mode enabled");
    }
}
