//! Log output for the command line.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level starts at `warn` and each
/// `-v` raises it by one step. Run warnings are printed by the generate
/// report, so at the default level the pipeline only logs errors.
pub fn init(verbose: u8) {
    let directives = match verbose {
        0 => "warn,entigen_codegen=error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
