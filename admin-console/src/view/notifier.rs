//! Transient notifications.
//!
//! A notification is shown for a while, fades, then disappears. Only one is
//! ever on screen: a new notification cancels the running cycle and starts
//! its own.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

/// Where notifications are drawn.
pub trait NotificationDisplay: Send + Sync + 'static {
    fn show(&self, message: &str);
    fn fade(&self);
    fn hide(&self);
}

/// Timing of a notification cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifierConfig {
    /// How long the message stays fully visible.
    pub visible_for: Duration,
    /// How long the fade lasts before the message is hidden.
    pub fade_for: Duration,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            visible_for: Duration::from_millis(3000),
            fade_for: Duration::from_millis(500),
        }
    }
}

/// Drives a [`NotificationDisplay`] through show, fade and hide.
pub struct Notifier {
    display: Arc<dyn NotificationDisplay>,
    config: NotifierConfig,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Notifier {
    pub fn new(display: Arc<dyn NotificationDisplay>) -> Self {
        Self::with_config(display, NotifierConfig::default())
    }

    pub fn with_config(display: Arc<dyn NotificationDisplay>, config: NotifierConfig) -> Self {
        Self {
            display,
            config,
            pending: Mutex::new(None),
        }
    }

    /// Show `message`, replacing any notification still on screen.
    ///
    /// Must be called from within a tokio runtime.
    pub fn notify(&self, message: &str) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(previous) = pending.take() {
            if !previous.is_finished() {
                debug!("Restarting notification cycle");
            }
            previous.abort();
        }

        self.display.show(message);

        let display = Arc::clone(&self.display);
        let config = self.config;
        *pending = Some(tokio::spawn(async move {
            sleep(config.visible_for).await;
            display.fade();
            sleep(config.fade_for).await;
            display.hide();
        }));
    }

    /// Whether a notification cycle is still running.
    pub fn is_active(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

/// Prints notifications to stdout, below the command output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalDisplay;

impl NotificationDisplay for TerminalDisplay {
    fn show(&self, message: &str) {
        println!("{}", message);
    }

    fn fade(&self) {
        debug!("Notification fading");
    }

    fn hide(&self) {
        debug!("Notification hidden");
    }
}
