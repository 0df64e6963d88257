// Server module entry point
// Listener creation, accept loop and graceful shutdown

pub mod connection;
pub mod listener;
pub mod signal;

pub use listener::create_reusable_listener;
pub use signal::{start_signal_handler, SignalHandler};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::AppState;
use crate::logger;

/// Run the accept loop until a shutdown signal arrives.
///
/// Each accepted connection is served in its own task; in-flight
/// connections are left to finish naturally after the loop exits.
pub async fn run(
    listener: TcpListener,
    state: Arc<AppState>,
    signal_handler: Arc<SignalHandler>,
) -> Result<(), Box<dyn std::error::Error>> {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        // The flag covers a signal that fires before we re-register on the
        // Notify; notify_waiters only wakes tasks already waiting.
        if signal_handler.shutdown_requested.load(Ordering::SeqCst) {
            logger::log_shutdown();
            break;
        }

        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                        );
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = signal_handler.shutdown.notified() => {}
        }
    }

    let in_flight = active_connections.load(Ordering::SeqCst);
    if in_flight > 0 {
        logger::log_warning(&format!(
            "{in_flight} connection(s) still in flight at shutdown"
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::time::Duration;

    fn test_state() -> Arc<AppState> {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        Arc::new(AppState::new(&cfg))
    }

    fn local_listener() -> TcpListener {
        create_reusable_listener("127.0.0.1:0".parse().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_run_exits_when_shutdown_requested_before_start() {
        let signal_handler = Arc::new(SignalHandler::new());
        signal_handler.request_shutdown();

        let result = tokio::time::timeout(
            Duration::from_secs(1),
            run(local_listener(), test_state(), signal_handler),
        )
        .await;
        assert!(result.is_ok(), "accept loop did not observe the shutdown flag");
    }

    #[tokio::test]
    async fn test_run_exits_on_shutdown_signal() {
        let signal_handler = Arc::new(SignalHandler::new());
        let trigger = {
            let handler = Arc::clone(&signal_handler);
            async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                handler.request_shutdown();
            }
        };

        let result = tokio::time::timeout(Duration::from_secs(1), async {
            tokio::join!(run(local_listener(), test_state(), signal_handler), trigger).0
        })
        .await;
        assert!(result.is_ok(), "accept loop did not stop after shutdown signal");
    }
}
