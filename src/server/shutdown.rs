//! Shutdown coordination using `CancellationToken`

use tokio_util::sync::CancellationToken;

/// Owns the process-wide shutdown token.
///
/// Servers receive a child token and stop accepting connections once it is
/// cancelled, either by Ctrl+C or by [`ShutdownController::shutdown`].
#[derive(Clone, Default)]
pub struct ShutdownController {
    token: CancellationToken,
}

impl ShutdownController {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Create a controller that cancels itself on Ctrl+C
    pub fn with_ctrl_c() -> Self {
        let controller = Self::new();
        let token = controller.token.clone();

        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("Received interrupt, shutting down");
                    token.cancel();
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to listen for interrupt signal");
                }
            }
        });

        controller
    }

    /// Token cancelled together with this controller
    pub fn child_token(&self) -> CancellationToken {
        self.token.child_token()
    }

    pub fn shutdown(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
