use std::io::{self, Write};

use axum::http::{HeaderName, HeaderValue, StatusCode};

use crate::domain::ports::{Logger, ResponseSink};
use crate::interface_adapters::logging::TracingLogger;

// Sink that streams an HTTP/1.1 response straight onto a transport.
//
// Headers are buffered until the status is written; the body is delimited by
// closing the connection. Header names and values are checked with the same
// rules as `http`, so CR/LF never reaches the head.
pub struct WireSink<W, L = TracingLogger> {
    transport: W,
    headers: Vec<(HeaderName, HeaderValue)>,
    status_written: bool,
    logger: L,
}

impl<W> WireSink<W>
where
    W: Write,
{
    pub fn new(transport: W) -> Self {
        Self::with_logger(transport, TracingLogger::default())
    }
}

impl<W, L> WireSink<W, L>
where
    W: Write,
    L: Logger,
{
    pub fn with_logger(transport: W, logger: L) -> Self {
        Self {
            transport,
            headers: Vec::new(),
            status_written: false,
            logger,
        }
    }

    pub fn into_inner(self) -> W {
        self.transport
    }

    fn head(&self, code: u16) -> Vec<u8> {
        let reason = StatusCode::from_u16(code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("");
        let mut head = format!("HTTP/1.1 {code} {reason}\r\n").into_bytes();
        for (name, value) in &self.headers {
            head.extend_from_slice(canonical_name(name).as_bytes());
            head.extend_from_slice(b": ");
            head.extend_from_slice(value.as_bytes());
            head.extend_from_slice(b"\r\n");
        }
        head.extend_from_slice(b"Connection: close\r\n\r\n");
        head
    }
}

// `http` lowercases names; restore Train-Case for the wire.
fn canonical_name(name: &HeaderName) -> String {
    name.as_str()
        .split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

impl<W, L> ResponseSink for WireSink<W, L>
where
    W: Write,
    L: Logger,
{
    fn set_header(&mut self, name: &str, value: &str) {
        if self.status_written {
            self.logger
                .warn(&format!("header {name} set after status was sent"));
            return;
        }

        let parsed = HeaderName::from_bytes(name.as_bytes())
            .ok()
            .zip(HeaderValue::from_str(value).ok());
        let Some((name, value)) = parsed else {
            self.logger
                .warn(&format!("dropping invalid response header: {name}"));
            return;
        };

        match self.headers.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.headers.push((name, value)),
        }
    }

    fn write_status(&mut self, code: u16) -> io::Result<()> {
        if self.status_written {
            return Err(io::Error::other("status already written"));
        }

        let head = self.head(code);
        // Mark as committed first; a partial head cannot be retried.
        self.status_written = true;
        self.transport.write_all(&head)
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        if !self.status_written {
            self.write_status(StatusCode::OK.as_u16())?;
        }

        self.transport.write_all(body)?;
        self.transport.flush()
    }
}
