use once_cell::sync::OnceCell;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Initialise diagnostic logging.
///
/// With `debug` set the level is `debug` and can be overridden through the
/// `RUST_LOG` environment variable. Otherwise only warnings and errors are
/// emitted. Events go to stderr, or to `log_file` when one is given, so they
/// never mix with the progress lines printed on stdout.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    // Without debug logging we force `warn` regardless of `RUST_LOG`.
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("warn")
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let name = path
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| "extension_icons.log".into());
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            if builder
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .is_ok()
            {
                let _ = FILE_GUARD.set(guard);
            }
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
}
