use std::panic;
use std::path::Path;

use tracing::error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use crate::app::restore_terminal;
use crate::error::WidgetError;

/// Sends log output to `log_file`; the terminal belongs to the UI.
///
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init_tracing(log_file: &Path) -> Result<WorkerGuard, WidgetError> {
    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = log_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "clearcast.log".into());

    let appender = tracing_appender::rolling::never(dir, name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        );
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}

/// Logs any unhandled fault, giving the terminal back first when the UI
/// owns it.
pub fn install_panic_hook(owns_terminal: bool) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if owns_terminal {
            let _ = restore_terminal();
        }
        error!(%info, "ClearCast error");
        previous(info);
    }));
}
