//! Terminal presentation: tables, prompts and notifications.

pub mod notifier;
pub mod prompt;
pub mod render;

pub use notifier::{NotificationDisplay, Notifier, NotifierConfig, TerminalDisplay};
pub use prompt::{Prompter, TerminalPrompter};
