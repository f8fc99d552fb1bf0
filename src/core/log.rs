use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

const APP_TARGET: &str = "fxrate";

/// Level for fxrate's own events and the `EnvFilter` fallback directive.
fn levels(verbose: bool) -> (LevelFilter, &'static str) {
    if verbose {
        (LevelFilter::DEBUG, "debug")
    } else {
        (LevelFilter::OFF, "off")
    }
}

fn app_filter(verbose: bool) -> Targets {
    Targets::new().with_target(APP_TARGET, levels(verbose).0)
}

/// Installs the global subscriber. Silent unless `verbose` is set, in which
/// case `RUST_LOG` can narrow the output further.
///
/// Logs go to stderr; stdout carries command output only.
pub fn init_logging(verbose: bool) {
    let (_, level) = levels(verbose);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(app_filter(verbose))
        .with(env_filter)
        .init();
}
