//! Utility functions shared across the service.

use tracing::info;

/// Wait for a shutdown signal (Ctrl+C or SIGTERM).
///
/// Used as the graceful-shutdown future for the HTTP server.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

/// Hard cut after at most `limit` characters.
///
/// Cuts between characters, never inside a UTF-8 sequence, and is not
/// word-boundary aware. Returns the input unchanged when it is short enough.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
