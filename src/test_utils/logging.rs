//! Log capture for test assertions.
//!
//! Captures are scoped to a closure with a thread-local subscriber, so
//! parallel tests never see each other's events.

use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing::field::{Field, Visit};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;

/// A captured log entry.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Layer that records every event into shared storage.
pub struct CaptureLayer {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl<S> tracing_subscriber::Layer<S> for CaptureLayer
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        struct MessageVisitor<'a> {
            message: &'a mut String,
            fields: &'a mut Vec<(String, String)>,
        }

        impl Visit for MessageVisitor<'_> {
            fn record_str(&mut self, field: &Field, value: &str) {
                if field.name() == "message" {
                    *self.message = value.to_string();
                } else {
                    self.fields.push((field.name().to_string(), value.to_string()));
                }
            }

            fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
                let value = format!("{value:?}");
                if field.name() == "message" {
                    *self.message = value;
                } else {
                    self.fields.push((field.name().to_string(), value));
                }
            }
        }

        let metadata = event.metadata();
        let mut message = String::new();
        let mut fields = Vec::new();
        event.record(&mut MessageVisitor {
            message: &mut message,
            fields: &mut fields,
        });

        if let Ok(mut entries) = self.entries.lock() {
            entries.push(LogEntry {
                level: *metadata.level(),
                target: metadata.target().to_string(),
                message,
                fields,
            });
        }
    }
}

/// Run `f` with a capturing subscriber and return its output and the logs
/// emitted at or above `level`.
pub fn capture_logs<T>(level: Level, f: impl FnOnce() -> T) -> (T, Vec<LogEntry>) {
    let entries = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(CaptureLayer {
            entries: Arc::clone(&entries),
        });

    let output = tracing::subscriber::with_default(subscriber, f);
    let logs = entries.lock().map(|e| e.clone()).unwrap_or_default();
    (output, logs)
}

/// Format captured logs for a failure message.
#[must_use]
pub fn format_logs(logs: &[LogEntry]) -> String {
    if logs.is_empty() {
        return String::from("No logs captured");
    }
    logs.iter()
        .map(|entry| {
            let mut line = format!("[{}] {}: {}", entry.level, entry.target, entry.message);
            for (key, value) in &entry.fields {
                line.push_str(&format!(" {key}={value}"));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
