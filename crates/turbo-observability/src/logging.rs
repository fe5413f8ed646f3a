//! Structured logging with view context.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use turbo_core::{LogFormat, LogLevel, ViewId, ViewPhase};

fn level_label(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "TRACE",
        LogLevel::Debug => "DEBUG",
        LogLevel::Info => "INFO",
        LogLevel::Warn => "WARN",
        LogLevel::Error => "ERROR",
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Wall-clock time of the entry.
    pub timestamp: DateTime<Utc>,
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// View ID for correlation.
    pub view_id: String,
    /// View name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    /// Route path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
    /// Microseconds since the view was mounted.
    pub elapsed_us: u64,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Extra fields as `key=value` pairs; strings are unquoted.
    pub fn fields_logfmt(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| match v {
                serde_json::Value::String(s) => format!("{}={}", k, s),
                other => format!("{}={}", k, other),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!(
            "{} [{}] {} view={}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            level_label(self.level),
            self.message,
            self.view_id
        );

        if let Some(route) = &self.route {
            s.push_str(&format!(" route={}", route));
        }

        if !self.fields.is_empty() {
            s.push_str(" |");
            for (k, v) in &self.fields {
                s.push_str(&format!(" {}={}", k, v));
            }
        }

        s.push_str(&format!(" ({}us)", self.elapsed_us));
        s
    }
}

/// Structured logger bound to one mounted view.
///
/// Entries are emitted as `tracing` events under the `turbo::view` target,
/// with view context and extra fields as event fields. In human format the
/// event message is the pre-rendered line.
#[derive(Debug, Clone)]
pub struct ViewLogger {
    view_id: ViewId,
    view: Option<String>,
    route: Option<String>,
    start_time: Instant,
    min_level: LogLevel,
    format: LogFormat,
}

impl ViewLogger {
    /// Create a new logger for a view.
    pub fn new(view_id: ViewId) -> Self {
        Self {
            view_id,
            view: None,
            route: None,
            start_time: Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    /// Set the view name.
    pub fn with_view(mut self, view: impl Into<String>) -> Self {
        self.view = Some(view.into());
        self
    }

    /// Set the route path.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    /// Log a lifecycle phase with its details as fields.
    pub fn phase(&self, phase: &ViewPhase) {
        let builder = match phase {
            ViewPhase::Error(error) => self.error_builder("view error").field("error", error.as_str()),
            ViewPhase::ProductsLoaded { brand_slug, count } => self
                .info_builder("products loaded")
                .field("brand", brand_slug.as_str())
                .field_u64("count", *count as u64),
            ViewPhase::Filtered { count } => self
                .debug_builder("listing filtered")
                .field_u64("count", *count as u64),
            ViewPhase::Init | ViewPhase::Teardown => self.info_builder(format!("view {}", phase)),
        };
        builder.field("phase", phase.name()).emit();
    }

    /// Build the entry for a message, or `None` if below the minimum level.
    pub fn entry(
        &self,
        level: LogLevel,
        message: &str,
        fields: BTreeMap<String, serde_json::Value>,
    ) -> Option<LogEntry> {
        if level < self.min_level {
            return None;
        }

        Some(LogEntry {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
            view_id: self.view_id.to_string(),
            view: self.view.clone(),
            route: self.route.clone(),
            fields,
            elapsed_us: self.elapsed_us(),
        })
    }

    /// Render an entry in this logger's format.
    pub fn render(&self, entry: &LogEntry) -> String {
        match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        }
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        let Some(entry) = self.entry(level, message, fields) else {
            return;
        };
        // JSON output is left to the subscriber; only human lines are pre-rendered.
        let message = match self.format {
            LogFormat::Json => entry.message.clone(),
            LogFormat::Human => entry.to_human(),
        };
        let view_id = entry.view_id.as_str();
        let view = entry.view.as_deref();
        let route = entry.route.as_deref();
        let elapsed_us = entry.elapsed_us;
        let extra = entry.fields_logfmt();

        macro_rules! emit {
            ($event:ident) => {
                tracing::$event!(
                    target: "turbo::view",
                    view_id,
                    view,
                    route,
                    elapsed_us,
                    extra = extra.as_str(),
                    "{}",
                    message
                )
            };
        }

        match level {
            LogLevel::Trace => emit!(trace),
            LogLevel::Debug => emit!(debug),
            LogLevel::Info => emit!(info),
            LogLevel::Warn => emit!(warn),
            LogLevel::Error => emit!(error),
        }
    }

    /// Get the view ID.
    pub fn view_id(&self) -> &ViewId {
        &self.view_id
    }

    /// Get elapsed time since logger creation.
    pub fn elapsed_us(&self) -> u64 {
        self.start_time.elapsed().as_micros() as u64
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a ViewLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a ViewLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an unsigned integer field.
    pub fn field_u64(mut self, key: &str, value: u64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Build the entry without emitting it.
    pub fn build(self) -> Option<LogEntry> {
        self.logger.entry(self.level, &self.message, self.fields)
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl ViewLogger {
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }

    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}
