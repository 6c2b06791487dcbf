//! # Admin Console
//!
//! Terminal front end for managing users, groups and role assignments.
//!
//! ## Architecture
//!
//! 1. **Cli**: Parses a command from the arguments or a shell line
//! 2. **Console**: Runs the command against the service and renders the result
//! 3. **Session**: Prints output, shows notifications and runs the shell loop
//!
//! ## Modules
//!
//! - [`config`]: Configuration and dependency initialization
//! - [`cli`]: Command line definitions
//! - [`console`]: Command dispatch
//! - [`session`]: One-shot and shell sessions
//! - [`view`]: Tables, prompts and notifications
//! - [`errors`]: Error types for the console

pub mod cli;
pub mod config;
pub mod console;
pub mod errors;
pub mod session;
pub mod view;

pub use cli::{Cli, Command};
pub use config::{Dependencies, LogFormat, Settings};
pub use console::{Console, Outcome};
pub use errors::ConsoleError;
pub use session::{LineOutcome, Session};
