pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::server::{run, run_with_config};
pub use interface_adapters::http::{JsonResponse, send_response};
pub use interface_adapters::protocol::ApiError;
pub use interface_adapters::sink::BufferedSink;
pub use interface_adapters::wire::WireSink;
pub use use_cases::send_response::ResponseSender;
