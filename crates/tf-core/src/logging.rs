use std::panic;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::run_id;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install a global panic hook that routes panics through `tracing`,
/// tagged with the process run id so a crashed ranking pass can be
/// correlated with the match logs it emitted. Installed once per process;
/// repeat calls are no-ops.
pub fn install_tracing_panic_hook(app_name: &'static str) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let default_hook = panic::take_hook();
        let include_backtrace = env_flag("TF_LOG_INCLUDE_BACKTRACE");

        panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));
            let message = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panic payload not string".into());

            tracing::error!(
                application = app_name,
                run_id = run_id::get(),
                location = location.as_deref().unwrap_or("unknown"),
                panic_message = %message,
                "panic captured"
            );

            if include_backtrace {
                default_hook(info);
            }
        }));
    });
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Resolves the optional file log directory from `TF_LOG_DIR`.
///
/// Returns `None` (stdout logging) when the variable is unset or the
/// directory cannot be created; a misconfigured log path must not take
/// the matching core down with it.
fn log_dir_from_env() -> Option<PathBuf> {
    let dir = PathBuf::from(std::env::var_os("TF_LOG_DIR")?);
    if let Err(err) = std::fs::create_dir_all(&dir) {
        tracing::warn!(error = %err, "failed to create TF_LOG_DIR; falling back to stdout");
        return None;
    }
    Some(dir)
}

/// Initialize the tracing subscriber for a process embedding this core.
///
/// `RUST_LOG` controls filtering (default `info`). With `TF_LOG_DIR` set,
/// output goes to a daily-rotated `<dir>/<app>.log`; otherwise stdout.
/// Emits one startup event carrying the process run id.
pub fn init_tracing_subscriber(app_name: &'static str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    let file_target = match log_dir_from_env() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(&dir, format!("{app_name}.log"));
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let _ = LOG_GUARD.set(guard);
            let _ = builder
                .with_writer(BoxMakeWriter::new(non_blocking))
                .try_init();
            Some(dir)
        }
        None => {
            let _ = builder.try_init();
            None
        }
    };

    let log_target = file_target
        .as_deref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "stdout".into());
    tracing::info!(
        application = app_name,
        run_id = run_id::get(),
        log_target = %log_target,
        "logging initialized"
    );
}
