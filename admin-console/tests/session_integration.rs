//! Integration tests for the admin console session.
//!
//! These tests drive the real Session and Console over real storage, with a
//! scripted prompter and a recording notification display.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use admin_console::config::{Settings, StorageMode};
use admin_console::view::{NotificationDisplay, Notifier, Prompter};
use admin_console::{Console, ConsoleError, Dependencies, LineOutcome, Session};
use admin_console_repository::SelectOptions;

// Prompter answering every question the same way
struct ScriptedPrompter {
    confirm: bool,
    pick: Vec<String>,
}

impl ScriptedPrompter {
    fn declining() -> Self {
        Self {
            confirm: false,
            pick: Vec::new(),
        }
    }

    fn accepting(pick: &[&str]) -> Self {
        Self {
            confirm: true,
            pick: pick.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, _prompt: &str) -> Result<bool, ConsoleError> {
        Ok(self.confirm)
    }

    fn select(&self, _prompt: &str, options: &SelectOptions) -> Result<Vec<String>, ConsoleError> {
        let labels = options.labels();
        Ok(self
            .pick
            .iter()
            .filter(|name| labels.contains(&name.as_str()))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
struct RecordingDisplay {
    shown: Mutex<Vec<String>>,
}

impl RecordingDisplay {
    fn shown(&self) -> Vec<String> {
        self.shown.lock().unwrap().clone()
    }
}

impl NotificationDisplay for RecordingDisplay {
    fn show(&self, message: &str) {
        self.shown.lock().unwrap().push(message.to_string());
    }

    fn fade(&self) {}

    fn hide(&self) {}
}

fn file_settings(dir: &tempfile::TempDir) -> Settings {
    Settings {
        storage_mode: StorageMode::File,
        data_dir: dir.path().to_path_buf(),
        ..Settings::default()
    }
}

fn open_session(
    settings: Settings,
    prompter: ScriptedPrompter,
) -> (Session<ScriptedPrompter>, Arc<RecordingDisplay>) {
    let deps = Dependencies::from_settings(settings).unwrap();
    let display = Arc::new(RecordingDisplay::default());
    let session = Session::new(
        Console::new(deps.service, prompter),
        Notifier::new(display.clone()),
    );
    (session, display)
}

fn run(session: &Session<ScriptedPrompter>, lines: &[&str]) {
    for line in lines {
        assert_eq!(
            session.handle_line(line).unwrap(),
            LineOutcome::Continue,
            "line: {}",
            line
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_shell_scenario_persists_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let (session, display) = open_session(file_settings(&dir), ScriptedPrompter::declining());

    run(
        &session,
        &[
            r#"users add "  Ar  un " arun@example.com Arun K"#,
            "users add user2 user2@example.com User Two",
            r#"groups create "Group 1""#,
            "groups add-users 1 'Ar un' user2",
            "groups add-users 1 'Ar un'",
        ],
    );

    assert_eq!(
        display.shown(),
        vec![
            "User created successfully!",
            "User created successfully!",
            "Group created successfully!",
            "User(s) added to Group successfully!",
            "User(s) added to Group successfully!",
        ]
    );

    let raw = std::fs::read_to_string(dir.path().join("groups.json")).unwrap();
    assert_eq!(raw, r#"[{"id":1,"groupName":"Group 1","users":["Ar un","user2"]}]"#);

    // A second process sees the same data.
    let (reopened, _) = open_session(file_settings(&dir), ScriptedPrompter::declining());
    let users = reopened.console().service().list_users();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].user_name, "Ar un");
}

#[tokio::test(start_paused = true)]
async fn test_declined_delete_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let (session, display) = open_session(file_settings(&dir), ScriptedPrompter::declining());
    run(&session, &["users add Arun arun@example.com Arun K", "users delete 1"]);

    assert_eq!(session.console().service().list_users().len(), 1);
    assert_eq!(display.shown(), vec!["User created successfully!"]);
}

#[tokio::test(start_paused = true)]
async fn test_confirmed_delete_then_id_reuse() {
    let dir = tempfile::tempdir().unwrap();
    let (session, _) = open_session(file_settings(&dir), ScriptedPrompter::accepting(&[]));
    run(
        &session,
        &[
            "users add a a@x.io A A",
            "users add b b@x.io B B",
            "users add c c@x.io C C",
            "users delete 2",
            "users add d d@x.io D D",
        ],
    );

    let ids: Vec<u64> = session
        .console()
        .service()
        .list_users()
        .iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[tokio::test(start_paused = true)]
async fn test_interactive_role_assignment() {
    let settings = Settings {
        storage_mode: StorageMode::Memory,
        ..Settings::default()
    };
    let (session, display) = open_session(settings, ScriptedPrompter::accepting(&["User 1", "Nobody"]));
    run(
        &session,
        &[
            "users add 'User 1' u1@x.io User One",
            "roles create 'Role 1' First",
            "roles create 'Role 2' Second",
            "roles assign-users 1",
        ],
    );

    let assignments = session.console().service().list_assignments();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].name, "Role 1");
    assert_eq!(assignments[0].assigned_users, vec!["User 1".to_string()]);
    assert_eq!(
        display.shown().last().map(String::as_str),
        Some("Role assigned for User(s) successfully!")
    );
}

#[tokio::test(start_paused = true)]
async fn test_notification_cycle_finishes() {
    let settings = Settings {
        storage_mode: StorageMode::Memory,
        ..Settings::default()
    };
    let (session, _) = open_session(settings, ScriptedPrompter::declining());
    run(&session, &["groups create Ops"]);
    assert!(session.notifier().is_active());

    tokio::time::sleep(Duration::from_millis(3600)).await;
    tokio::task::yield_now().await;

    assert!(!session.notifier().is_active());
}

#[tokio::test(start_paused = true)]
async fn test_shell_control_lines() {
    let settings = Settings {
        storage_mode: StorageMode::Memory,
        ..Settings::default()
    };
    let (session, display) = open_session(settings, ScriptedPrompter::declining());

    assert_eq!(session.handle_line("   ").unwrap(), LineOutcome::Continue);
    assert_eq!(session.handle_line("help").unwrap(), LineOutcome::Continue);
    assert_eq!(session.handle_line("users --help").unwrap(), LineOutcome::Continue);
    assert_eq!(session.handle_line("exit").unwrap(), LineOutcome::Exit);
    assert_eq!(session.handle_line("quit").unwrap(), LineOutcome::Exit);
    assert!(display.shown().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_bad_lines_are_usage_errors() {
    let settings = Settings {
        storage_mode: StorageMode::Memory,
        ..Settings::default()
    };
    let (session, _) = open_session(settings, ScriptedPrompter::declining());

    for line in [
        "users frobnicate",
        "users show US001",
        r#"groups create "Group 1"#,
        "shell",
    ] {
        assert!(
            matches!(session.handle_line(line), Err(ConsoleError::Usage(_))),
            "line: {}",
            line
        );
    }

    session.handle_line("groups create 'Group 1'").unwrap();
    assert!(matches!(
        session.handle_line("groups add-users 1 Ghost"),
        Err(ConsoleError::Usage(_))
    ));
    assert!(session.console().service().get_group(1).unwrap().users.is_empty());
}

fn memory_session() -> (Session<ScriptedPrompter>, Arc<RecordingDisplay>) {
    let settings = Settings {
        storage_mode: StorageMode::Memory,
        ..Settings::default()
    };
    open_session(settings, ScriptedPrompter::declining())
}

fn group_names(session: &Session<ScriptedPrompter>) -> Vec<String> {
    session
        .console()
        .service()
        .list_groups()
        .into_iter()
        .map(|g| g.group_name)
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_lines_stops_at_exit() {
    let (session, display) = memory_session();
    let input: &[u8] = b"groups create Ops\nusers frobnicate\n\ngroups create Dev\nexit\ngroups create Never\n";

    session.run_lines(input).await.unwrap();

    assert_eq!(group_names(&session), vec!["Ops", "Dev"]);
    assert_eq!(
        display.shown(),
        vec!["Group created successfully!", "Group created successfully!"]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_lines_ends_at_eof() {
    let (session, _) = memory_session();
    let input: &[u8] = b"groups create Ops\ngroups create 'Last group'";

    session.run_lines(input).await.unwrap();

    assert_eq!(group_names(&session), vec!["Ops", "Last group"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_lines_empty_input() {
    let (session, display) = memory_session();

    session.run_lines(&b""[..]).await.unwrap();

    assert!(group_names(&session).is_empty());
    assert!(display.shown().is_empty());
}
