//! One-shot and interactive shell sessions.

use std::io::Write;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, instrument, warn};

use crate::cli::{split_words, Cli, Command};
use crate::console::{Console, Outcome};
use crate::errors::ConsoleError;
use crate::view::{Notifier, Prompter};

const BINARY_NAME: &str = "admin-console";
const SHELL_PROMPT: &str = "admin> ";

/// Whether the shell should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Exit,
}

/// Prints command output and drives notifications.
pub struct Session<P> {
    console: Console<P>,
    notifier: Notifier,
}

impl<P: Prompter> Session<P> {
    pub fn new(console: Console<P>, notifier: Notifier) -> Self {
        Self { console, notifier }
    }

    pub fn console(&self) -> &Console<P> {
        &self.console
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Run a single command and present its outcome.
    pub fn run_once(&self, command: Command) -> Result<(), ConsoleError> {
        let outcome = self.console.execute(command)?;
        self.present(outcome);
        Ok(())
    }

    /// Handle one line typed into the shell.
    ///
    /// Blank lines are ignored; `exit` and `quit` end the session and `help`
    /// prints usage. Anything else is parsed as a command.
    pub fn handle_line(&self, line: &str) -> Result<LineOutcome, ConsoleError> {
        let words = split_words(line).map_err(ConsoleError::usage)?;

        match words.first().map(String::as_str) {
            None => Ok(LineOutcome::Continue),
            Some("exit") | Some("quit") => Ok(LineOutcome::Exit),
            Some("help") => {
                println!("{}", Cli::command().render_help());
                Ok(LineOutcome::Continue)
            }
            Some(_) => {
                let args = std::iter::once(BINARY_NAME.to_string()).chain(words);
                let cli = match Cli::try_parse_from(args) {
                    Ok(cli) => cli,
                    Err(err)
                        if matches!(
                            err.kind(),
                            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
                        ) =>
                    {
                        println!("{}", err.render());
                        return Ok(LineOutcome::Continue);
                    }
                    Err(err) => return Err(err.into()),
                };

                match cli.command {
                    Some(Command::Shell) | None => {
                        Err(ConsoleError::usage("Already in the shell"))
                    }
                    Some(command) => self.run_once(command).map(|()| LineOutcome::Continue),
                }
            }
        }
    }

    /// Read commands from stdin until `exit`, end of input or Ctrl-C.
    #[instrument(skip(self))]
    pub async fn run_shell(&self) -> Result<(), ConsoleError> {
        info!("Starting interactive shell");
        self.run_lines(BufReader::new(tokio::io::stdin())).await?;
        info!("Shell closed");
        Ok(())
    }

    /// Read commands from `reader` until `exit`, end of input or Ctrl-C.
    ///
    /// A failing command is reported and the loop keeps going. Needs the
    /// multi-threaded runtime, since prompts block on the terminal.
    pub async fn run_lines<R>(&self, reader: R) -> Result<(), ConsoleError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();

        loop {
            print!("{}", SHELL_PROMPT);
            std::io::stdout().flush()?;

            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
            };
            let Some(line) = line else {
                break;
            };

            match tokio::task::block_in_place(|| self.handle_line(&line)) {
                Ok(LineOutcome::Continue) => {}
                Ok(LineOutcome::Exit) => break,
                Err(e) => {
                    warn!(error = %e, "Command failed");
                    eprintln!("{}", e);
                }
            }
        }

        Ok(())
    }

    fn present(&self, outcome: Outcome) {
        if let Some(output) = outcome.output {
            println!("{}", output);
        }
        if let Some(notice) = outcome.notice {
            self.notifier.notify(notice);
        }
    }
}
