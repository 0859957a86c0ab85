// Use cases layer: response workflows built on the domain ports.

pub mod send_response;

#[cfg(test)]
pub(crate) mod test_support;

pub use send_response::ResponseSender;
