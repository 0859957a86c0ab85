// Interface adapters: HTTP sinks, wire protocol, and the tracing logger.

pub mod handlers;
pub mod http;
pub mod logging;
pub mod protocol;
pub mod routes;
pub mod sink;
pub mod wire;
