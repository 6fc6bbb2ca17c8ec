#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
#[cfg(feature = "trace")]
use tracing_subscriber::util::SubscriberInitExt;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

#[cfg(feature = "trace")]
const TRACE_FILE: &str = "romantool-trace.jsonl";

#[cfg(feature = "trace")]
fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("roman_core=debug,roman_cli=debug"))
}

/// JSON-lines subscriber appending to `romantool-trace.jsonl` in `dir`.
///
/// Writes go straight to the file: `die!` exits via `process::exit`, which
/// would drop anything still queued in a background writer.
#[cfg(feature = "trace")]
fn json_file_subscriber(
    dir: &Path,
) -> Result<impl tracing::Subscriber + Send + Sync + 'static, InitError> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(TRACE_FILE)
        .build(dir)?;

    Ok(tracing_subscriber::fmt()
        .json()
        .with_writer(file_appender)
        .with_target(true)
        .with_env_filter(env_filter())
        .finish())
}

/// Install the global subscriber: JSON lines under `log_dir` if given,
/// human-readable stderr otherwise.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) {
    INIT.call_once(|| match log_dir {
        Some(dir) => match json_file_subscriber(dir) {
            Ok(subscriber) => subscriber.init(),
            Err(e) => eprintln!("Error opening trace log in {}: {e}", dir.display()),
        },
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_env_filter(env_filter())
                .init();
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&std::path::Path>) {}
