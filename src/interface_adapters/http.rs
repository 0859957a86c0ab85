// Shared HTTP response helpers for consistent JSON payloads.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::ports::ResponseSink;
use crate::interface_adapters::logging::TracingLogger;
use crate::interface_adapters::sink::BufferedSink;
use crate::use_cases::send_response::ResponseSender;

/// Sends `payload` as JSON with status `code`, logging through `tracing`.
///
/// Failures never reach the caller; see [`ResponseSender::send`].
pub fn send_response<S, T>(sink: &mut S, code: u16, payload: &T)
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    ResponseSender::new(TracingLogger::default()).send(sink, code, payload);
}

// Axum response that goes through the JSON response sender.
#[derive(Debug)]
pub struct JsonResponse<T> {
    status: StatusCode,
    payload: T,
}

impl<T> JsonResponse<T> {
    pub fn new(status: StatusCode, payload: T) -> Self {
        Self { status, payload }
    }

    pub fn ok(payload: T) -> Self {
        Self::new(StatusCode::OK, payload)
    }
}

impl<T> IntoResponse for JsonResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let mut sink = BufferedSink::new();
        send_response(&mut sink, self.status.as_u16(), &self.payload);
        sink.into_response()
    }
}
