//! Command dispatch.
//!
//! Each command calls the service, then re-renders the affected collection
//! from storage and picks the notification text. A lookup miss is logged and
//! produces no output.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use admin_console_repository::{ConsoleService, RepositoryError, SelectOptions};
use admin_console_shared::{EntityId, UserFields};

use crate::cli::{Command, GroupCommand, NewUserArgs, RoleCommand, UpdateUserArgs, UserCommand};
use crate::errors::ConsoleError;
use crate::view::render;
use crate::view::Prompter;

pub const USER_CREATED: &str = "User created successfully!";
pub const USER_UPDATED: &str = "User updated successfully!";
pub const USER_DELETED: &str = "User deleted successfully!";
pub const GROUP_CREATED: &str = "Group created successfully!";
pub const USERS_ADDED_TO_GROUP: &str = "User(s) added to Group successfully!";
pub const USERS_REMOVED_FROM_GROUP: &str = "User(s) removed from Group successfully!";
pub const ROLE_CREATED: &str = "Role created successfully!";
pub const ROLE_ASSIGNED_TO_USERS: &str = "Role assigned for User(s) successfully!";
pub const ROLE_ASSIGNED_TO_GROUPS: &str = "Role assigned for Group(s) successfully!";

pub const DELETE_USER_PROMPT: &str = "Are you sure you want to delete this user?";

/// What a command produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Text to print, usually the re-rendered collection.
    pub output: Option<String>,
    /// Notification to show after the output.
    pub notice: Option<&'static str>,
}

impl Outcome {
    /// Output only, nothing changed.
    pub fn rendered(output: impl Into<String>) -> Self {
        Self {
            output: Some(output.into()),
            notice: None,
        }
    }

    /// A completed mutation.
    pub fn done(notice: &'static str, output: impl Into<String>) -> Self {
        Self {
            output: Some(output.into()),
            notice: Some(notice),
        }
    }

    /// Nothing to print and nothing changed.
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn is_unchanged(&self) -> bool {
        self.output.is_none() && self.notice.is_none()
    }
}

/// Turn a lookup miss into `None`; other errors propagate.
fn found<T>(result: Result<T, RepositoryError>) -> Result<Option<T>, ConsoleError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_not_found() => {
            warn!(error = %err, "Lookup missed, nothing to do");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// Runs parsed commands against the service.
pub struct Console<P> {
    service: Arc<ConsoleService>,
    prompter: P,
}

impl<P: Prompter> Console<P> {
    pub fn new(service: Arc<ConsoleService>, prompter: P) -> Self {
        Self { service, prompter }
    }

    pub fn service(&self) -> &ConsoleService {
        &self.service
    }

    /// Run one command.
    ///
    /// # Returns
    ///
    /// * `Ok(Outcome)` - What to print and which notification to show
    /// * `Err(ConsoleError)` - If storage failed, a prompt failed or a name is not selectable
    #[instrument(skip(self), level = "debug")]
    pub fn execute(&self, command: Command) -> Result<Outcome, ConsoleError> {
        match command {
            Command::Users(command) => self.users(command),
            Command::Groups(command) => self.groups(command),
            Command::Roles(command) => self.roles(command),
            Command::Shell => Err(ConsoleError::usage("Already in the shell")),
        }
    }

    fn users(&self, command: UserCommand) -> Result<Outcome, ConsoleError> {
        match command {
            UserCommand::List => Ok(Outcome::rendered(self.users_table())),
            UserCommand::Show { id } => {
                let Some(user) = found(self.service.get_user(id))? else {
                    return Ok(Outcome::unchanged());
                };
                Ok(Outcome::rendered(render::user_detail(&user)))
            }
            UserCommand::Add(args) => self.add_user(args),
            UserCommand::Update(args) => self.update_user(args),
            UserCommand::Delete { id, yes } => self.delete_user(id, yes),
        }
    }

    fn add_user(&self, args: NewUserArgs) -> Result<Outcome, ConsoleError> {
        let fields = UserFields::new(args.user_name, args.email, args.first_name, args.last_name);
        self.service.create_user(&fields)?;
        Ok(Outcome::done(USER_CREATED, self.users_table()))
    }

    /// Unspecified fields are pre-filled from the stored user.
    fn update_user(&self, args: UpdateUserArgs) -> Result<Outcome, ConsoleError> {
        let Some(current) = found(self.service.get_user(args.id))? else {
            return Ok(Outcome::unchanged());
        };

        let mut fields = current.fields();
        if let Some(user_name) = args.user_name {
            fields.user_name = user_name;
        }
        if let Some(email) = args.email {
            fields.email = email;
        }
        if let Some(first_name) = args.first_name {
            fields.first_name = first_name;
        }
        if let Some(last_name) = args.last_name {
            fields.last_name = last_name;
        }

        if found(self.service.update_user(args.id, &fields))?.is_none() {
            return Ok(Outcome::unchanged());
        }
        Ok(Outcome::done(USER_UPDATED, self.users_table()))
    }

    fn delete_user(&self, id: EntityId, yes: bool) -> Result<Outcome, ConsoleError> {
        if found(self.service.get_user(id))?.is_none() {
            return Ok(Outcome::unchanged());
        }

        if !yes && !self.prompter.confirm(DELETE_USER_PROMPT)? {
            info!(user_id = id, "User deletion canceled");
            return Ok(Outcome::unchanged());
        }

        if found(self.service.delete_user(id))?.is_none() {
            return Ok(Outcome::unchanged());
        }
        Ok(Outcome::done(USER_DELETED, self.users_table()))
    }

    fn groups(&self, command: GroupCommand) -> Result<Outcome, ConsoleError> {
        match command {
            GroupCommand::List => Ok(Outcome::rendered(self.groups_table())),
            GroupCommand::Create { group_name } => {
                self.service.create_group(&group_name)?;
                Ok(Outcome::done(GROUP_CREATED, self.groups_table()))
            }
            GroupCommand::AddUsers { id, user_names } => {
                let Some(options) = found(self.service.user_options_for_group(id))? else {
                    return Ok(Outcome::unchanged());
                };
                let Some(selected) = self.choose(&options, user_names, "Select users to add")?
                else {
                    return Ok(Outcome::rendered("No users to add"));
                };

                if found(self.service.add_users_to_group(id, &selected))?.is_none() {
                    return Ok(Outcome::unchanged());
                }
                Ok(Outcome::done(USERS_ADDED_TO_GROUP, self.groups_table()))
            }
            GroupCommand::RemoveUsers { id, user_names } => {
                let Some(options) = found(self.service.member_options_for_group(id))? else {
                    return Ok(Outcome::unchanged());
                };
                let Some(selected) =
                    self.choose(&options, user_names, "Select users to remove")?
                else {
                    return Ok(Outcome::rendered("No users to remove"));
                };

                if found(self.service.remove_users_from_group(id, &selected))?.is_none() {
                    return Ok(Outcome::unchanged());
                }
                Ok(Outcome::done(USERS_REMOVED_FROM_GROUP, self.groups_table()))
            }
        }
    }

    fn roles(&self, command: RoleCommand) -> Result<Outcome, ConsoleError> {
        match command {
            RoleCommand::List => Ok(Outcome::rendered(render::roles_table(
                &self.service.list_roles(),
            ))),
            RoleCommand::Create { name, description } => {
                self.service.create_role(&name, &description)?;
                Ok(Outcome::done(
                    ROLE_CREATED,
                    render::roles_table(&self.service.list_roles()),
                ))
            }
            RoleCommand::AssignUsers { id, user_names } => {
                if found(self.service.get_role(id))?.is_none() {
                    return Ok(Outcome::unchanged());
                }
                let options = self.service.user_options();
                let Some(selected) = self.choose(&options, user_names, "Select users to assign")?
                else {
                    return Ok(Outcome::rendered("No users to assign"));
                };

                if found(self.service.assign_users_to_role(id, &selected))?.is_none() {
                    return Ok(Outcome::unchanged());
                }
                Ok(Outcome::done(ROLE_ASSIGNED_TO_USERS, self.assignments_table()))
            }
            RoleCommand::AssignGroups { id, group_names } => {
                if found(self.service.get_role(id))?.is_none() {
                    return Ok(Outcome::unchanged());
                }
                let options = self.service.group_options();
                let Some(selected) =
                    self.choose(&options, group_names, "Select groups to assign")?
                else {
                    return Ok(Outcome::rendered("No groups to assign"));
                };

                if found(self.service.assign_groups_to_role(id, &selected))?.is_none() {
                    return Ok(Outcome::unchanged());
                }
                Ok(Outcome::done(ROLE_ASSIGNED_TO_GROUPS, self.assignments_table()))
            }
            RoleCommand::Assignments => Ok(Outcome::rendered(self.assignments_table())),
        }
    }

    /// Names to submit: `given` when every one is an option, otherwise an
    /// interactive pick. `None` when there are no options at all.
    fn choose(
        &self,
        options: &SelectOptions,
        given: Vec<String>,
        prompt: &str,
    ) -> Result<Option<Vec<String>>, ConsoleError> {
        if !options.can_submit() {
            return Ok(None);
        }
        if given.is_empty() {
            return self.prompter.select(prompt, options).map(Some);
        }

        let labels = options.labels();
        if let Some(unknown) = given.iter().find(|name| !labels.contains(&name.as_str())) {
            return Err(ConsoleError::usage(format!(
                "'{}' is not one of the options:\n{}",
                unknown,
                render::options_list(options)
            )));
        }
        Ok(Some(given))
    }

    fn users_table(&self) -> String {
        render::users_table(&self.service.list_users())
    }

    fn groups_table(&self) -> String {
        render::groups_table(&self.service.list_groups())
    }

    fn assignments_table(&self) -> String {
        render::assignments_table(&self.service.list_assignments())
    }
}
