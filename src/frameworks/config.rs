use std::{env, net::IpAddr};

// Runtime/server settings read from the environment.

pub const DEFAULT_HTTP_PORT: u16 = 3000;

pub fn http_port() -> u16 {
    env::var("CONSOLE_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT)
}

pub fn bind_ip() -> IpAddr {
    env::var("CONSOLE_SERVER_BIND")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::from([127, 0, 0, 1]))
}

pub fn json_logs() -> bool {
    matches!(env::var("LOG_FORMAT").as_deref(), Ok("json"))
}
