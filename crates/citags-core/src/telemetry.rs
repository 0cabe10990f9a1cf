//! Centralised tracing initialisation for the citags binary.
//!
//! Call [`init_tracing`] once at program start to configure the global
//! subscriber. All diagnostics go to stderr; stdout stays clean for shell
//! consumers of the generated script.
//!
//! Safe to call more than once: the global subscriber can only be set
//! once per process, and subsequent calls are silently ignored.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the global tracing subscriber.
///
/// When `json` is set, log lines are emitted as newline-delimited JSON.
/// `level` is the default verbosity; the `RUST_LOG` environment variable
/// takes precedence for fine-grained filtering.
pub fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
            .ok();
    }
}
