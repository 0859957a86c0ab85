use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use serde::{Serialize, Serializer};

use crate::domain::ports::{Logger, ResponseSink};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LogLevel {
    Info,
    Warn,
    Error,
}

// Logger double that keeps every line so tests can assert on failures.
#[derive(Clone, Default)]
pub(crate) struct RecordingLogger {
    lines: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl RecordingLogger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines.lock().expect("log mutex poisoned").clone()
    }

    fn push(&self, level: LogLevel, message: &str) {
        let mut guard = self.lines.lock().expect("log mutex poisoned");
        guard.push((level, message.to_string()));
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

// Capturing sink with switchable write failures.
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub headers: Vec<(String, String)>,
    pub status: Option<u16>,
    pub body: Vec<u8>,
    pub status_writes: usize,
    pub body_writes: usize,
    fail_status: bool,
    fail_body: bool,
}

impl RecordingSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing_status(mut self) -> Self {
        self.fail_status = true;
        self
    }

    pub(crate) fn failing_body(mut self) -> Self {
        self.fail_body = true;
        self
    }

    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl ResponseSink for RecordingSink {
    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    fn write_status(&mut self, code: u16) -> io::Result<()> {
        self.status_writes += 1;
        if self.fail_status {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "status failed"));
        }

        self.status = Some(code);
        Ok(())
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        self.body_writes += 1;
        if self.fail_body {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "body failed"));
        }

        self.body.extend_from_slice(body);
        Ok(())
    }
}

// Payload whose serializer always rejects it.
pub(crate) struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(serde::ser::Error::custom("unsupported value"))
    }
}

// JSON objects only allow string keys, so this map cannot be encoded.
pub(crate) fn unsupported_map() -> HashMap<(u8, u8), u8> {
    HashMap::from([((1, 2), 3)])
}
