use std::sync::OnceLock;

static BASE_URL: OnceLock<String> = OnceLock::new();

// Start the console server once per test binary and return its base URL.
//
// The socket is bound before the server thread starts, so connections made
// right away queue in the backlog until the accept loop picks them up.
pub fn base_url() -> &'static str {
    BASE_URL.get_or_init(|| {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        listener
            .set_nonblocking(true)
            .expect("nonblocking listener");
        let addr = listener.local_addr().expect("local addr");

        // A dedicated runtime keeps the server alive across `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("server runtime");
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("tokio listener");
                console_server::run(listener).await.expect("server failed");
            });
        });

        format!("http://{addr}")
    })
}
