//! UI state.
//!
//! Key handling is pure: keys update the state and may produce an [`Action`], which the
//! application performs before feeding the outcome back.

use crossterm::event::KeyCode;
use ctrlhora_models::{ClockEventKind, NewUser, Session, User, UserUpdate};
use tui::widgets::ListState;

/// Work requested by a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Login { username: String, password: String },
    RegisterClockEvent(ClockEventKind),
    Logout,
    RefreshUsers,
    CreateUser(NewUser),
    UpdateUser { username: String, update: UserUpdate },
    DeleteUser { username: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
}

impl Default for LoginField {
    fn default() -> Self {
        Self::Username
    }
}

impl LoginForm {
    fn focused_value(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserFormField {
    Username,
    Password,
    FullName,
    Rut,
    Email,
    PhoneNumber,
    IsAdmin,
}

impl UserFormField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
            Self::FullName => "Full name",
            Self::Rut => "RUT",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone number",
            Self::IsAdmin => "Administrator",
        }
    }
}

const CREATE_FIELDS: &[UserFormField] = &[
    UserFormField::Username,
    UserFormField::Password,
    UserFormField::FullName,
    UserFormField::Rut,
    UserFormField::Email,
    UserFormField::PhoneNumber,
    UserFormField::IsAdmin,
];

// The update endpoint only takes a password and the admin flag.
const EDIT_FIELDS: &[UserFormField] = &[UserFormField::Password, UserFormField::IsAdmin];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFormMode {
    Create,
    Edit { username: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub mode: UserFormMode,
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub rut: String,
    pub email: String,
    pub phone_number: String,
    pub is_admin: bool,
    pub focus: UserFormField,
}

impl UserForm {
    pub fn create() -> Self {
        Self {
            mode: UserFormMode::Create,
            username: String::new(),
            password: String::new(),
            full_name: String::new(),
            rut: String::new(),
            email: String::new(),
            phone_number: String::new(),
            is_admin: false,
            focus: UserFormField::Username,
        }
    }

    pub fn edit(user: &User) -> Self {
        Self {
            mode: UserFormMode::Edit {
                username: user.username.clone(),
            },
            username: user.username.clone(),
            is_admin: user.is_admin,
            focus: UserFormField::Password,
            ..Self::create()
        }
    }

    pub fn title(&self) -> String {
        match &self.mode {
            UserFormMode::Create => "New user".into(),
            UserFormMode::Edit { username } => format!("Edit '{username}'"),
        }
    }

    pub fn fields(&self) -> &'static [UserFormField] {
        match self.mode {
            UserFormMode::Create => CREATE_FIELDS,
            UserFormMode::Edit { .. } => EDIT_FIELDS,
        }
    }

    pub fn value(&self, field: UserFormField) -> &str {
        match field {
            UserFormField::Username => &self.username,
            UserFormField::Password => &self.password,
            UserFormField::FullName => &self.full_name,
            UserFormField::Rut => &self.rut,
            UserFormField::Email => &self.email,
            UserFormField::PhoneNumber => &self.phone_number,
            UserFormField::IsAdmin => "",
        }
    }

    fn value_mut(&mut self, field: UserFormField) -> Option<&mut String> {
        match field {
            UserFormField::Username => Some(&mut self.username),
            UserFormField::Password => Some(&mut self.password),
            UserFormField::FullName => Some(&mut self.full_name),
            UserFormField::Rut => Some(&mut self.rut),
            UserFormField::Email => Some(&mut self.email),
            UserFormField::PhoneNumber => Some(&mut self.phone_number),
            UserFormField::IsAdmin => None,
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (index + 1) % fields.len()
        } else {
            (index + fields.len() - 1) % fields.len()
        };
        self.focus = fields[next];
    }

    /// Build the action for this form, or the reason it cannot be submitted.
    fn submit(&self) -> Result<Action, &'static str> {
        match &self.mode {
            UserFormMode::Create => {
                if self.username.trim().is_empty() || self.password.is_empty() {
                    return Err("Username and password are required");
                }

                Ok(Action::CreateUser(NewUser {
                    username: self.username.trim().into(),
                    password: self.password.clone(),
                    is_admin: self.is_admin,
                    full_name: non_empty(&self.full_name),
                    rut: non_empty(&self.rut),
                    email: non_empty(&self.email),
                    phone_number: non_empty(&self.phone_number),
                }))
            }
            UserFormMode::Edit { username } => Ok(Action::UpdateUser {
                username: username.clone(),
                update: UserUpdate {
                    username: username.clone(),
                    password: (!self.password.is_empty()).then(|| self.password.clone()),
                    is_admin: self.is_admin,
                },
            }),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Login(LoginForm),
    Controls,
    UserForm(UserForm),
    ConfirmDelete { username: String },
}

pub struct AppState {
    pub mode: Mode,
    pub session: Option<Session>,
    pub users: Vec<User>,
    pub users_state: ListState,
    pub message: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Login(LoginForm::default()),
            session: None,
            users: Vec::new(),
            users_state: ListState::default(),
            message: None,
            should_quit: false,
        }
    }

    /// Start from a stored session, if any.
    ///
    /// Administrators get their user list loaded right away.
    pub fn restore(&mut self, session: Option<Session>) -> Option<Action> {
        let session = session?;
        let is_admin = session.is_admin;
        self.message = Some(format!(
            "Welcome back, {} ({}).",
            session.username,
            session.role()
        ));
        self.session = Some(session);
        self.mode = Mode::Controls;

        is_admin.then_some(Action::RefreshUsers)
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().map(|s| s.is_admin).unwrap_or(false)
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users_state.selected().and_then(|i| self.users.get(i))
    }

    pub fn set_message<T: Into<String>>(&mut self, message: T) {
        self.message = Some(message.into());
    }

    pub fn on_login_result(&mut self, result: Result<Session, String>) -> Option<Action> {
        match result {
            Ok(session) => {
                let is_admin = session.is_admin;
                self.set_message(if is_admin {
                    "Login successful. Administrator session."
                } else {
                    "Login successful."
                });
                self.session = Some(session);
                self.mode = Mode::Controls;

                is_admin.then_some(Action::RefreshUsers)
            }
            Err(message) => {
                // Keep the username, retype the password.
                if let Mode::Login(form) = &mut self.mode {
                    form.password.clear();
                    form.focus = LoginField::Password;
                }
                self.set_message(message);
                None
            }
        }
    }

    pub fn on_clock_event_result(&mut self, kind: ClockEventKind, result: Result<(), String>) {
        match result {
            Ok(()) => self.set_message(format!("{} registered.", kind.label())),
            Err(message) => self.set_message(message),
        }
    }

    pub fn on_logout_result(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.session = None;
                self.users.clear();
                self.users_state.select(None);
                self.mode = Mode::Login(LoginForm::default());
                self.set_message("Logged out.");
            }
            Err(message) => self.set_message(message),
        }
    }

    /// Apply a refreshed user list, with the message to show on success.
    pub fn on_users_result(&mut self, success: Option<&str>, result: Result<Vec<User>, String>) {
        match result {
            Ok(users) => {
                self.users = users;
                self.clamp_selection();
                match success {
                    Some(message) => self.set_message(message),
                    None => self.set_message(format!("{} user(s) loaded.", self.users.len())),
                }
            }
            Err(message) => self.set_message(message),
        }
    }

    fn clamp_selection(&mut self) {
        let selected = match (self.users.len(), self.users_state.selected()) {
            (0, _) => None,
            (len, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
        self.users_state.select(selected);
    }

    fn next_user(&mut self) {
        if self.users.is_empty() {
            return;
        }

        let i = match self.users_state.selected() {
            Some(i) if i + 1 < self.users.len() => i + 1,
            _ => 0,
        };
        self.users_state.select(Some(i));
    }

    fn previous_user(&mut self) {
        if self.users.is_empty() {
            return;
        }

        let i = match self.users_state.selected() {
            Some(0) | None => self.users.len() - 1,
            Some(i) => i - 1,
        };
        self.users_state.select(Some(i));
    }

    pub fn on_key(&mut self, key: KeyCode) -> Option<Action> {
        match &self.mode {
            Mode::Login(_) => self.on_login_key(key),
            Mode::Controls => self.on_controls_key(key),
            Mode::UserForm(_) => self.on_user_form_key(key),
            Mode::ConfirmDelete { .. } => self.on_confirm_delete_key(key),
        }
    }

    fn on_login_key(&mut self, key: KeyCode) -> Option<Action> {
        let Mode::Login(form) = &mut self.mode else {
            return None;
        };

        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.switch_focus(),
            KeyCode::Backspace => {
                form.focused_value().pop();
            }
            KeyCode::Char(c) => form.focused_value().push(c),
            KeyCode::Enter => {
                if form.username.trim().is_empty() || form.password.is_empty() {
                    self.set_message("Username and password are required");
                    return None;
                }

                return Some(Action::Login {
                    username: form.username.trim().into(),
                    password: form.password.clone(),
                });
            }
            _ => (),
        }

        None
    }

    fn on_controls_key(&mut self, key: KeyCode) -> Option<Action> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('e') => return self.clock_event(ClockEventKind::Entry),
            KeyCode::Char('x') => return self.clock_event(ClockEventKind::Exit),
            KeyCode::Char('l') => return Some(Action::Logout),
            _ if self.is_admin() => return self.on_admin_key(key),
            _ => (),
        }

        None
    }

    fn clock_event(&mut self, kind: ClockEventKind) -> Option<Action> {
        if self.is_admin() {
            self.set_message(match kind {
                ClockEventKind::Entry => "Administrators cannot register entries",
                ClockEventKind::Exit => "Administrators cannot register exits",
            });
            None
        } else {
            Some(Action::RegisterClockEvent(kind))
        }
    }

    fn on_admin_key(&mut self, key: KeyCode) -> Option<Action> {
        match key {
            KeyCode::Up => self.previous_user(),
            KeyCode::Down => self.next_user(),
            KeyCode::Char('r') => return Some(Action::RefreshUsers),
            KeyCode::Char('n') => self.mode = Mode::UserForm(UserForm::create()),
            KeyCode::Char('m') => match self.selected_user() {
                Some(user) => self.mode = Mode::UserForm(UserForm::edit(user)),
                None => self.set_message("Select a user first"),
            },
            KeyCode::Char('d') => match self.selected_user() {
                Some(user) => {
                    self.mode = Mode::ConfirmDelete {
                        username: user.username.clone(),
                    }
                }
                None => self.set_message("Select a user first"),
            },
            _ => (),
        }

        None
    }

    fn on_user_form_key(&mut self, key: KeyCode) -> Option<Action> {
        let Mode::UserForm(form) = &mut self.mode else {
            return None;
        };

        match key {
            KeyCode::Esc => {
                self.mode = Mode::Controls;
                self.set_message("Cancelled.");
            }
            KeyCode::Tab | KeyCode::Down => form.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => form.move_focus(false),
            KeyCode::Char(' ') if form.focus == UserFormField::IsAdmin => {
                form.is_admin = !form.is_admin;
            }
            KeyCode::Char(c) => {
                if let Some(value) = form.value_mut(form.focus) {
                    value.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(value) = form.value_mut(form.focus) {
                    value.pop();
                }
            }
            KeyCode::Enter => match form.submit() {
                Ok(action) => {
                    self.mode = Mode::Controls;
                    return Some(action);
                }
                Err(message) => self.set_message(message),
            },
            _ => (),
        }

        None
    }

    fn on_confirm_delete_key(&mut self, key: KeyCode) -> Option<Action> {
        let Mode::ConfirmDelete { username } = &self.mode else {
            return None;
        };

        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                let username = username.clone();
                self.mode = Mode::Controls;
                Some(Action::DeleteUser { username })
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = Mode::Controls;
                self.set_message("Deletion cancelled.");
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn session(is_admin: bool) -> Session {
        Session {
            access_token: "token".into(),
            token_type: "bearer".into(),
            username: "ana".into(),
            is_admin,
        }
    }

    fn user(username: &str, is_admin: bool) -> User {
        User {
            username: username.into(),
            is_admin,
            ..Default::default()
        }
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            assert_eq!(state.on_key(KeyCode::Char(c)), None);
        }
    }

    fn admin_state_with_users() -> AppState {
        let mut state = AppState::new();
        state.restore(Some(session(true)));
        state.on_users_result(None, Ok(vec![user("ana", true), user("bob", false)]));
        state
    }

    #[test]
    fn login_form_editing_and_submit() {
        let mut state = AppState::new();

        type_text(&mut state, "anaa");
        state.on_key(KeyCode::Backspace);
        state.on_key(KeyCode::Tab);
        type_text(&mut state, "secret");

        assert_eq!(
            state.on_key(KeyCode::Enter),
            Some(Action::Login {
                username: "ana".into(),
                password: "secret".into()
            })
        );
    }

    #[test]
    fn login_requires_both_fields() {
        let mut state = AppState::new();
        type_text(&mut state, "ana");

        assert_eq!(state.on_key(KeyCode::Enter), None);
        assert_eq!(
            state.message.as_deref(),
            Some("Username and password are required")
        );
    }

    #[test]
    fn login_letters_are_text_not_commands() {
        let mut state = AppState::new();
        type_text(&mut state, "qex");

        assert!(!state.should_quit);
        assert_eq!(
            state.mode,
            Mode::Login(LoginForm {
                username: "qex".into(),
                password: String::new(),
                focus: LoginField::Username
            })
        );
    }

    #[test]
    fn login_failure_keeps_form() {
        let mut state = AppState::new();
        type_text(&mut state, "ana");
        state.on_key(KeyCode::Tab);
        type_text(&mut state, "wrong");

        let action = state.on_login_result(Err("Login failed: bad".into()));
        assert_eq!(action, None);
        assert_eq!(state.message.as_deref(), Some("Login failed: bad"));
        assert_eq!(
            state.mode,
            Mode::Login(LoginForm {
                username: "ana".into(),
                password: String::new(),
                focus: LoginField::Password
            })
        );
    }

    #[test]
    fn login_success_switches_to_controls() {
        let mut state = AppState::new();

        assert_eq!(state.on_login_result(Ok(session(false))), None);
        assert_eq!(state.mode, Mode::Controls);
        assert_eq!(state.message.as_deref(), Some("Login successful."));

        let mut state = AppState::new();
        assert_eq!(
            state.on_login_result(Ok(session(true))),
            Some(Action::RefreshUsers)
        );
    }

    #[test]
    fn esc_on_login_quits() {
        let mut state = AppState::new();
        state.on_key(KeyCode::Esc);
        assert!(state.should_quit);
    }

    #[test]
    fn restore_session() {
        let mut state = AppState::new();
        assert_eq!(state.restore(None), None);
        assert!(matches!(state.mode, Mode::Login(_)));

        assert_eq!(state.restore(Some(session(false))), None);
        assert_eq!(state.mode, Mode::Controls);
        assert_eq!(
            state.message.as_deref(),
            Some("Welcome back, ana (user).")
        );
    }

    #[test]
    fn controls_for_user() {
        let mut state = AppState::new();
        state.restore(Some(session(false)));

        assert_eq!(
            state.on_key(KeyCode::Char('e')),
            Some(Action::RegisterClockEvent(ClockEventKind::Entry))
        );
        assert_eq!(
            state.on_key(KeyCode::Char('x')),
            Some(Action::RegisterClockEvent(ClockEventKind::Exit))
        );
        // Admin keys do nothing for users.
        assert_eq!(state.on_key(KeyCode::Char('n')), None);
        assert_eq!(state.mode, Mode::Controls);

        state.on_clock_event_result(ClockEventKind::Exit, Ok(()));
        assert_eq!(state.message.as_deref(), Some("Exit registered."));

        assert_eq!(state.on_key(KeyCode::Char('l')), Some(Action::Logout));
        state.on_key(KeyCode::Char('q'));
        assert!(state.should_quit);
    }

    #[test]
    fn controls_for_admin_refuse_clock_events() {
        let mut state = admin_state_with_users();

        assert_eq!(state.on_key(KeyCode::Char('e')), None);
        assert_eq!(
            state.message.as_deref(),
            Some("Administrators cannot register entries")
        );
        assert_eq!(state.on_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn logout_clears_everything() {
        let mut state = admin_state_with_users();

        state.on_logout_result(Ok(()));
        assert_eq!(state.session, None);
        assert!(state.users.is_empty());
        assert_eq!(state.users_state.selected(), None);
        assert_eq!(state.mode, Mode::Login(LoginForm::default()));
        assert_eq!(state.message.as_deref(), Some("Logged out."));
    }

    #[test]
    fn user_selection_wraps() {
        let mut state = admin_state_with_users();
        assert_eq!(state.selected_user().map(|u| u.username.as_str()), Some("ana"));

        state.on_key(KeyCode::Down);
        assert_eq!(state.selected_user().map(|u| u.username.as_str()), Some("bob"));
        state.on_key(KeyCode::Down);
        assert_eq!(state.selected_user().map(|u| u.username.as_str()), Some("ana"));
        state.on_key(KeyCode::Up);
        assert_eq!(state.selected_user().map(|u| u.username.as_str()), Some("bob"));
    }

    #[test]
    fn refreshed_list_clamps_selection() {
        let mut state = admin_state_with_users();
        state.on_key(KeyCode::Down);

        state.on_users_result(
            Some("User deleted successfully."),
            Ok(vec![user("ana", true)]),
        );
        assert_eq!(state.users_state.selected(), Some(0));
        assert_eq!(
            state.message.as_deref(),
            Some("User deleted successfully.")
        );

        state.on_users_result(None, Ok(vec![]));
        assert_eq!(state.users_state.selected(), None);
    }

    #[test]
    fn create_user_form() {
        let mut state = admin_state_with_users();
        assert_eq!(state.on_key(KeyCode::Char('n')), None);

        type_text(&mut state, "carol");
        state.on_key(KeyCode::Tab);
        type_text(&mut state, "pw");
        state.on_key(KeyCode::Tab);
        type_text(&mut state, "Carol Diaz");
        state.on_key(KeyCode::BackTab);
        state.on_key(KeyCode::BackTab);
        state.on_key(KeyCode::BackTab);
        // Wrapped around to the admin box.
        state.on_key(KeyCode::Char(' '));

        assert_eq!(
            state.on_key(KeyCode::Enter),
            Some(Action::CreateUser(NewUser {
                username: "carol".into(),
                password: "pw".into(),
                is_admin: true,
                full_name: Some("Carol Diaz".into()),
                ..Default::default()
            }))
        );
        assert_eq!(state.mode, Mode::Controls);
    }

    #[test]
    fn create_user_form_requires_credentials() {
        let mut state = admin_state_with_users();
        state.on_key(KeyCode::Char('n'));
        type_text(&mut state, "carol");

        assert_eq!(state.on_key(KeyCode::Enter), None);
        assert!(matches!(state.mode, Mode::UserForm(_)));
        assert_eq!(
            state.message.as_deref(),
            Some("Username and password are required")
        );
    }

    #[test]
    fn edit_user_form() {
        let mut state = admin_state_with_users();
        state.on_key(KeyCode::Down);
        state.on_key(KeyCode::Char('m'));

        // Password left empty, admin box toggled on.
        state.on_key(KeyCode::Tab);
        state.on_key(KeyCode::Char(' '));

        assert_eq!(
            state.on_key(KeyCode::Enter),
            Some(Action::UpdateUser {
                username: "bob".into(),
                update: UserUpdate {
                    username: "bob".into(),
                    password: None,
                    is_admin: true
                }
            })
        );
    }

    #[test]
    fn edit_user_form_with_password() {
        let mut state = admin_state_with_users();
        state.on_key(KeyCode::Char('m'));
        type_text(&mut state, "new pw");

        assert_eq!(
            state.on_key(KeyCode::Enter),
            Some(Action::UpdateUser {
                username: "ana".into(),
                update: UserUpdate {
                    username: "ana".into(),
                    password: Some("new pw".into()),
                    is_admin: true
                }
            })
        );
    }

    #[test]
    fn form_escape_cancels() {
        let mut state = admin_state_with_users();
        state.on_key(KeyCode::Char('n'));
        type_text(&mut state, "carol");

        assert_eq!(state.on_key(KeyCode::Esc), None);
        assert_eq!(state.mode, Mode::Controls);
        assert!(!state.should_quit);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut state = admin_state_with_users();
        state.on_key(KeyCode::Down);

        assert_eq!(state.on_key(KeyCode::Char('d')), None);
        assert_eq!(
            state.mode,
            Mode::ConfirmDelete {
                username: "bob".into()
            }
        );
        assert_eq!(state.on_key(KeyCode::Char('n')), None);
        assert_eq!(state.mode, Mode::Controls);

        state.on_key(KeyCode::Char('d'));
        assert_eq!(
            state.on_key(KeyCode::Char('y')),
            Some(Action::DeleteUser {
                username: "bob".into()
            })
        );
        assert_eq!(state.mode, Mode::Controls);
    }

    #[test]
    fn edit_and_delete_need_a_selection() {
        let mut state = AppState::new();
        state.restore(Some(session(true)));

        assert_eq!(state.on_key(KeyCode::Char('m')), None);
        assert_eq!(state.message.as_deref(), Some("Select a user first"));
        assert_eq!(state.on_key(KeyCode::Char('d')), None);
        assert_eq!(state.mode, Mode::Controls);
    }
}
