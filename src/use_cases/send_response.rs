use serde::Serialize;

use crate::domain::errors::SendError;
use crate::domain::ports::{Logger, ResponseSink};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

// Status written when the payload cannot be encoded.
pub const FALLBACK_STATUS: u16 = 500;

// JSON response sender with an injected logging side channel.
pub struct ResponseSender<L> {
    logger: L,
}

impl<L> ResponseSender<L>
where
    L: Logger,
{
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    /// Writes `payload` as a JSON response with status `code` to `sink`.
    ///
    /// This operation has no failure channel for the caller. Encoding
    /// failures are logged and replaced with a bodyless 500, and transport
    /// write failures are logged and dropped. The sink must not have been
    /// written to before, and must not be reused afterwards.
    pub fn send<S, T>(&self, sink: &mut S, code: u16, payload: &T)
    where
        S: ResponseSink + ?Sized,
        T: Serialize + ?Sized,
    {
        let body = match serde_json::to_vec(payload) {
            Ok(body) => body,
            Err(err) => {
                self.report(SendError::Encoding(err));
                // The requested status is dropped on this path.
                if let Err(err) = sink.write_status(FALLBACK_STATUS) {
                    self.report(SendError::Status(err));
                }
                return;
            }
        };

        sink.set_header(CONTENT_TYPE, APPLICATION_JSON);
        if let Err(err) = sink.write_status(code) {
            self.report(SendError::Status(err));
            return;
        }

        // Status and headers are committed at this point; nothing to undo.
        if let Err(err) = sink.write_body(&body) {
            self.report(SendError::Body(err));
        }
    }

    fn report(&self, err: SendError) {
        let message = err.to_string();
        match err {
            SendError::Encoding(_) => self.logger.info(&message),
            SendError::Status(_) | SendError::Body(_) => self.logger.error(&message),
        }
    }
}
