// Domain layer: error kinds and the ports the response sender depends on.

pub mod errors;
pub mod ports;

pub use errors::SendError;
pub use ports::{Logger, ResponseSink};
