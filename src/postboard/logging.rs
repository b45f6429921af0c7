use crate::error::{PostError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `default_directive` (e.g. `"warn"` or `"postboard=debug"`) applies unless
/// `RUST_LOG` is set. Output goes to stderr so it never mixes with rendered
/// posts on stdout.
pub fn init(default_directive: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| PostError::Api(format!("failed to install tracing subscriber: {err}")))
}
