//! Plain-text tables for the console output.

use admin_console_repository::SelectOptions;
use admin_console_shared::{Group, Identified, Role, User};

const COLUMN_GAP: &str = "  ";

/// A table with left-aligned, padded columns.
struct Table {
    headers: &'static [&'static str],
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(headers: &'static [&'static str]) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render the table, or the header plus `placeholder` when there are no rows.
    fn render(&self, placeholder: &str) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(Self::line(self.headers.iter().copied(), &widths));
        lines.push(Self::line(widths.iter().map(|w| "-".repeat(*w)), &widths));

        if self.rows.is_empty() {
            lines.push(placeholder.to_string());
        }
        for row in &self.rows {
            lines.push(Self::line(row.iter().map(String::as_str), &widths));
        }

        lines.join("\n")
    }

    fn line<I, S>(cells: I, widths: &[usize]) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let padded: Vec<String> = cells
            .into_iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
            .collect();
        padded.join(COLUMN_GAP).trim_end().to_string()
    }
}

/// Join membership names, or `placeholder` when there are none.
fn names_cell(names: &[String], placeholder: &str) -> String {
    if names.is_empty() {
        placeholder.to_string()
    } else {
        names.join(", ")
    }
}

pub fn users_table(users: &[User]) -> String {
    let mut table = Table::new(&["ID", "User name", "Email", "First name", "Last name"]);
    for user in users {
        table.push(vec![
            user.display_id(),
            user.user_name.clone(),
            user.email.clone(),
            user.first_name.clone(),
            user.last_name.clone(),
        ]);
    }
    table.render("No users")
}

/// A single user, one field per line.
pub fn user_detail(user: &User) -> String {
    [
        ("ID", user.display_id()),
        ("User name", user.user_name.clone()),
        ("Email", user.email.clone()),
        ("First name", user.first_name.clone()),
        ("Last name", user.last_name.clone()),
    ]
    .iter()
    .map(|(label, value)| format!("{:<11}{}", format!("{}:", label), value))
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn groups_table(groups: &[Group]) -> String {
    let mut table = Table::new(&["ID", "Group name", "Users"]);
    for group in groups {
        table.push(vec![
            group.display_id(),
            group.group_name.clone(),
            names_cell(&group.users, "No users assigned"),
        ]);
    }
    table.render("No groups")
}

pub fn roles_table(roles: &[Role]) -> String {
    let mut table = Table::new(&["ID", "Name", "Description"]);
    for role in roles {
        table.push(vec![
            role.display_id(),
            role.name.clone(),
            role.description.clone(),
        ]);
    }
    table.render("No roles")
}

/// Roles with their assigned users and groups. Expects the output of `list_assignments`.
pub fn assignments_table(roles: &[Role]) -> String {
    let mut table = Table::new(&["Role", "Assigned users", "Assigned groups"]);
    for role in roles {
        table.push(vec![
            role.name.clone(),
            names_cell(&role.assigned_users, "No users assigned"),
            names_cell(&role.assigned_groups, "No groups assigned"),
        ]);
    }
    table.render("No roles assigned")
}

/// The labels of `options`, one per line.
pub fn options_list(options: &SelectOptions) -> String {
    options
        .labels()
        .iter()
        .map(|label| format!("  - {}", label))
        .collect::<Vec<_>>()
        .join("\n")
}
