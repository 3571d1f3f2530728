use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,qa_chat_ui=debug,tower_http=debug";

/// Initialize structured logging.
///
/// - `EnvFilter` for dynamic log levels (`RUST_LOG`).
/// - `fmt` layer, compact or JSON per [`LogFormat`].
pub fn init(format: LogFormat) {
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = match format {
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .compact()
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .with_target(true)
            .json()
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
