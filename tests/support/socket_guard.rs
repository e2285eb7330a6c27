use std::net::TcpListener;
use std::panic::Location;

use wiremock::MockServer;

/// Set to `1`/`true` to turn skipped mock-server tests into failures.
const REQUIRE_SOCKETS_ENV: &str = "FAA_CHARTS_REQUIRE_SOCKET_TESTS";

fn sockets_required() -> bool {
    std::env::var(REQUIRE_SOCKETS_ENV)
        .is_ok_and(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true"))
}

/// Starts a mock server, or returns `None` when the sandbox forbids binding
/// localhost sockets.
#[track_caller]
pub fn start_mock_server_or_skip() -> impl std::future::Future<Output = Option<MockServer>> {
    let caller = Location::caller();
    let can_bind = TcpListener::bind("127.0.0.1:0").is_ok();

    async move {
        if can_bind {
            return Some(MockServer::start().await);
        }
        let message = format!(
            "cannot bind a localhost socket for the mock server ({}:{})",
            caller.file(),
            caller.line()
        );
        assert!(!sockets_required(), "{message}; {REQUIRE_SOCKETS_ENV} is set");
        eprintln!("{message}; skipping");
        None
    }
}
