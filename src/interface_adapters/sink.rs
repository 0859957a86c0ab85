use std::io;

use axum::body::Body;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::domain::ports::{Logger, ResponseSink};
use crate::interface_adapters::logging::TracingLogger;

// In-memory sink that is turned into an axum response once written.
//
// Every write replaces the previous one, so a reused sink keeps only the
// last status and body.
pub struct BufferedSink<L = TracingLogger> {
    headers: HeaderMap,
    status: Option<StatusCode>,
    body: Vec<u8>,
    logger: L,
}

impl BufferedSink {
    pub fn new() -> Self {
        Self::with_logger(TracingLogger::default())
    }
}

impl Default for BufferedSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> BufferedSink<L>
where
    L: Logger,
{
    pub fn with_logger(logger: L) -> Self {
        Self {
            headers: HeaderMap::new(),
            status: None,
            body: Vec::new(),
            logger,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl<L> ResponseSink for BufferedSink<L>
where
    L: Logger,
{
    fn set_header(&mut self, name: &str, value: &str) {
        let parsed = HeaderName::from_bytes(name.as_bytes())
            .ok()
            .zip(HeaderValue::from_str(value).ok());
        match parsed {
            Some((name, value)) => {
                self.headers.insert(name, value);
            }
            None => self
                .logger
                .warn(&format!("dropping invalid response header: {name}")),
        }
    }

    fn write_status(&mut self, code: u16) -> io::Result<()> {
        let status = StatusCode::from_u16(code).unwrap_or_else(|_| {
            self.logger
                .warn(&format!("invalid status code {code}, sending 500 instead"));
            StatusCode::INTERNAL_SERVER_ERROR
        });
        self.status = Some(status);
        Ok(())
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        self.body.clear();
        self.body.extend_from_slice(body);
        Ok(())
    }
}

impl<L> IntoResponse for BufferedSink<L> {
    fn into_response(self) -> Response {
        // Same as a plain writer: no explicit status means 200.
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *response.headers_mut() = self.headers;
        response
    }
}
