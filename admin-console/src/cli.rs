//! Command line interface.

use admin_console_shared::EntityId;
use clap::{Args, Parser, Subcommand};

/// Admin console for users, groups and role assignments.
#[derive(Parser, Debug)]
#[command(name = "admin-console", author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top level commands. Without one the console starts the interactive shell.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Manage users
    #[command(subcommand)]
    Users(UserCommand),

    /// Manage groups and their members
    #[command(subcommand)]
    Groups(GroupCommand),

    /// Manage roles and their assignments
    #[command(subcommand)]
    Roles(RoleCommand),

    /// Read one command per line until `exit`
    Shell,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// List all users
    List,

    /// Show a single user
    Show { id: EntityId },

    /// Add a user
    Add(NewUserArgs),

    /// Update a user; unspecified fields keep their current value
    Update(UpdateUserArgs),

    /// Delete a user
    Delete {
        id: EntityId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct NewUserArgs {
    pub user_name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserArgs {
    pub id: EntityId,

    #[arg(long)]
    pub user_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum GroupCommand {
    /// List all groups with their members
    List,

    /// Create a group
    Create { group_name: String },

    /// Add users to a group; prompts for a selection when no names are given
    AddUsers {
        id: EntityId,
        user_names: Vec<String>,
    },

    /// Remove users from a group; prompts for a selection when no names are given
    RemoveUsers {
        id: EntityId,
        user_names: Vec<String>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RoleCommand {
    /// List all roles
    List,

    /// Create a role
    Create { name: String, description: String },

    /// Assign a role to users; prompts for a selection when no names are given
    AssignUsers {
        id: EntityId,
        user_names: Vec<String>,
    },

    /// Assign a role to groups; prompts for a selection when no names are given
    AssignGroups {
        id: EntityId,
        group_names: Vec<String>,
    },

    /// List roles that have users or groups assigned
    Assignments,
}

/// Split a shell line into words using POSIX shell quoting, without any
/// expansion.
///
/// Whitespace separates words. Single quotes keep everything literally,
/// backslashes included. Inside double quotes a backslash only escapes `"`
/// and `\`; before any other character it is kept. Outside quotes a
/// backslash escapes the next character.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The words, empty for a blank line
/// * `Err(String)` - If a quote is left open
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (Some('"'), '\\') => match chars.peek() {
                Some(&next) if next == '"' || next == '\\' => {
                    current.push(next);
                    chars.next();
                }
                _ => current.push('\\'),
            },
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, '\\') => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (_, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("Unterminated {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
