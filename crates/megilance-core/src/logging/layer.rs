//! `tracing` layer that mirrors events into the session log.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Number, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use super::entry::SessionLogEntry;
use super::writer::SessionLogWriter;

pub struct JsonlLayer {
    writer: Arc<SessionLogWriter>,
}

impl JsonlLayer {
    pub fn new(logs_dir: impl AsRef<Path>, session: impl Into<String>) -> std::io::Result<Self> {
        Ok(Self {
            writer: Arc::new(SessionLogWriter::new(logs_dir, session)?),
        })
    }

    pub fn log_path(&self) -> &Path {
        self.writer.path()
    }
}

impl<S> Layer<S> for JsonlLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let mut entry = SessionLogEntry::new(
            metadata.level().as_str().to_lowercase(),
            self.writer.session(),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );
        if !visitor.fields.is_empty() {
            entry = entry.with_fields(Value::Object(visitor.fields));
        }
        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                entry = entry.with_span(spans.join(" > "));
            }
        }

        // A failed log write must never take the UI down.
        let _ = self.writer.write(&entry);
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Map<String, Value>,
}

impl FieldVisitor {
    fn put(&mut self, field: &Field, value: Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(buf, "{value:?}");
        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.put(field, Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.put(field, Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, Value::Bool(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = Number::from_f64(value) {
            self.put(field, Value::Number(n));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::read_entries;
    use tempfile::TempDir;
    use tracing_subscriber::prelude::*;

    #[test]
    fn captures_events_with_fields_and_spans() {
        let temp = TempDir::new().unwrap();
        let layer = JsonlLayer::new(temp.path(), "test").unwrap();
        let path = layer.log_path().to_path_buf();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("theme hydrated");
            let span = tracing::info_span!("toaster");
            let _guard = span.enter();
            tracing::warn!(count = 7, dark = true, "queue trimmed");
        });

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].msg, "theme hydrated");
        assert_eq!(entries[0].level, "info");
        assert_eq!(entries[1].span.as_deref(), Some("toaster"));
        let fields = entries[1].fields.as_ref().unwrap();
        assert_eq!(fields["count"], 7);
        assert_eq!(fields["dark"], true);
    }
}
