use std::collections::VecDeque;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing_appender::rolling;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Log severity level (mirrors tracing levels for UI use).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// A single log entry for display in the console overlay.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub target: String,
    pub message: String,
}

/// Shared ring buffer for log entries consumed by the console UI.
pub type LogBuffer = Arc<Mutex<VecDeque<LogEntry>>>;

/// Create a new shared log buffer with a given capacity.
pub fn new_log_buffer(capacity: usize) -> LogBuffer {
    Arc::new(Mutex::new(VecDeque::with_capacity(capacity)))
}

/// Return the log directory path.
///
/// Precedence: `GEMITRACE_LOG_DIR` env var > platform default.
/// macOS: `~/Library/Logs/gemitrace/`
/// Linux: `$XDG_DATA_HOME/gemitrace/logs/` or `~/.local/share/gemitrace/logs/`
pub fn log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("GEMITRACE_LOG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = dirs::home_dir() {
            return home.join("Library").join("Logs").join("gemitrace");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        if let Some(data) = dirs::data_dir() {
            return data.join("gemitrace").join("logs");
        }
    }

    PathBuf::from("logs")
}

const MAX_CONSOLE_LINES: usize = 1000;
const LOG_RETENTION_DAYS: u64 = 7;

/// Remove gemitrace log files older than `max_age_days` from the given directory.
///
/// Only deletes files whose name starts with `gemitrace.log` (the prefix used
/// by the daily rolling appender) to avoid accidentally removing unrelated
/// files if the log directory is shared.
fn cleanup_old_logs(log_path: &std::path::Path, max_age_days: u64) {
    let cutoff =
        std::time::SystemTime::now() - std::time::Duration::from_secs(max_age_days * 86400);
    if let Ok(entries) = std::fs::read_dir(log_path) {
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !name.starts_with("gemitrace.log") {
                continue;
            }
            if let Ok(meta) = entry.metadata() {
                if let Ok(modified) = meta.modified() {
                    if modified < cutoff {
                        let _ = std::fs::remove_file(entry.path());
                    }
                }
            }
        }
    }
}

/// A tracing layer that pushes log entries into a shared ring buffer.
struct ConsoleLayer {
    buffer: LogBuffer,
    max_lines: usize,
}

impl<S: tracing::Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let level = match *event.metadata().level() {
            tracing::Level::TRACE => LogLevel::Trace,
            tracing::Level::DEBUG => LogLevel::Debug,
            tracing::Level::INFO => LogLevel::Info,
            tracing::Level::WARN => LogLevel::Warn,
            tracing::Level::ERROR => LogLevel::Error,
        };

        let target = event.metadata().target().to_string();

        let mut visitor = MessageVisitor {
            message: None,
            fields: Vec::new(),
        };
        event.record(&mut visitor);
        let message = visitor.finish();

        let entry = LogEntry {
            level,
            target,
            message,
        };

        if let Ok(mut buf) = self.buffer.lock() {
            if buf.len() >= self.max_lines {
                buf.pop_front();
            }
            buf.push_back(entry);
        }
    }
}

struct MessageVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match self.message {
            Some(msg) if self.fields.is_empty() => msg,
            Some(msg) => format!("{} {}", msg, self.fields.join(" ")),
            None if self.fields.is_empty() => String::new(),
            None => self.fields.join(" "),
        }
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }
}

/// Initialize the logging subsystem. Returns the shared log buffer for the console.
///
/// Filter controlled by `GEMITRACE_LOG` or `RUST_LOG` (default: `info`).
/// File output: daily rotation in `log_dir()`, 7-day retention.
/// Console buffer: ring buffer of `MAX_CONSOLE_LINES` entries.
pub fn init() -> LogBuffer {
    let buffer = new_log_buffer(MAX_CONSOLE_LINES);

    let filter = EnvFilter::try_from_env("GEMITRACE_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let log_path = log_dir();
    if let Err(e) = std::fs::create_dir_all(&log_path) {
        eprintln!(
            "warning: failed to create log directory {:?}: {}",
            log_path, e
        );
    }

    cleanup_old_logs(&log_path, LOG_RETENTION_DAYS);

    let file_appender = rolling::daily(&log_path, "gemitrace.log");
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true);

    let console_layer = ConsoleLayer {
        buffer: buffer.clone(),
        max_lines: MAX_CONSOLE_LINES,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    buffer
}
