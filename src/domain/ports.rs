use std::io;

// Port for the per-request destination of one HTTP response.
//
// A sink accepts a single header/status/body sequence. Headers must be set
// before `write_status`; once the status is written they are committed.
pub trait ResponseSink {
    fn set_header(&mut self, name: &str, value: &str);
    fn write_status(&mut self, code: u16) -> io::Result<()>;
    fn write_body(&mut self, body: &[u8]) -> io::Result<()>;
}

// Port for the logging side channel used to report send failures. Sink
// adapters take one too, for input they drop or rewrite.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}
