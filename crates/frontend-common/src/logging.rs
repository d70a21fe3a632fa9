//! Console logging for the browser build

use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Route `tracing` events, and `log` records from dependencies, to the
/// browser console. Later calls are ignored.
pub fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialised");
    }
}
