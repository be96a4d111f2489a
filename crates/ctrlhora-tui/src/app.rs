//! Application module.

use crossterm::event::KeyCode;
use ctrlhora_core::{
    clock::{clock_now, format_clock},
    use_cases::{
        clocking::register_clock_event::RegisterClockEvent,
        session::{get_session::GetSession, login::Login, logout::Logout},
        users::{
            create_user::CreateUser, delete_user::DeleteUser, update_user::UpdateUser,
            ListUsersInterface,
        },
    },
    CoreContext,
};
use shaku::HasComponent;
use tui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::state::{Action, AppState, LoginField, Mode, UserForm, UserFormField, UserFormMode};

pub struct App<'a> {
    pub title: &'a str,
    pub clock: String,
    pub data: AppState,
}

impl<'a> App<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            clock: String::new(),
            data: AppState::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.data.should_quit
    }

    /// Restore the stored session, as the page does with its stored token.
    pub async fn load_session(&mut self, ctx: &CoreContext<'_>) {
        self.on_tick(ctx);

        match GetSession.run(ctx).await {
            Ok(session) => {
                if let Some(action) = self.data.restore(session) {
                    self.perform(ctx, action).await;
                }
            }
            Err(e) => self.data.set_message(e.to_string()),
        }
    }

    /// Run an action and its follow-ups.
    pub async fn perform(&mut self, ctx: &CoreContext<'_>, action: Action) {
        let mut next = Some(action);

        while let Some(action) = next.take() {
            next = self.perform_one(ctx, action).await;
        }
    }

    async fn perform_one(&mut self, ctx: &CoreContext<'_>, action: Action) -> Option<Action> {
        match action {
            Action::Login { username, password } => {
                let result = Login
                    .run(ctx, &username, &password)
                    .await
                    .map_err(|e| e.to_string());
                self.data.on_login_result(result)
            }
            Action::RegisterClockEvent(kind) => {
                let result = RegisterClockEvent
                    .run(ctx, kind)
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string());
                self.data.on_clock_event_result(kind, result);
                None
            }
            Action::Logout => {
                let result = Logout.run(ctx).await.map_err(|e| e.to_string());
                self.data.on_logout_result(result);
                None
            }
            Action::RefreshUsers => {
                let list_users: &dyn ListUsersInterface = ctx.core_module.resolve_ref();
                let result = list_users.run(ctx).await.map_err(|e| e.to_string());
                self.data.on_users_result(None, result);
                None
            }
            Action::CreateUser(user) => {
                let result = CreateUser.run(ctx, &user).await.map_err(|e| e.to_string());
                self.data
                    .on_users_result(Some("User created successfully."), result);
                None
            }
            Action::UpdateUser { username, update } => {
                let result = UpdateUser
                    .run(ctx, &username, &update)
                    .await
                    .map_err(|e| e.to_string());
                self.data
                    .on_users_result(Some("User updated successfully."), result);
                None
            }
            Action::DeleteUser { username } => {
                let result = DeleteUser
                    .run(ctx, &username)
                    .await
                    .map_err(|e| e.to_string());
                self.data
                    .on_users_result(Some("User deleted successfully."), result);
                None
            }
        }
    }

    pub fn on_key(&mut self, key: KeyCode) -> Option<Action> {
        self.data.on_key(key)
    }

    pub fn on_tick(&mut self, ctx: &CoreContext<'_>) {
        self.clock = format_clock(clock_now(ctx.config), ctx.config.clock.locale);
    }

    pub fn draw<B: Backend>(&mut self, f: &mut Frame<B>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(3),
                    Constraint::Min(8),
                    Constraint::Length(3),
                    Constraint::Length(3),
                ]
                .as_ref(),
            )
            .split(f.size());

        self.draw_header(f, chunks[0]);
        if matches!(self.data.mode, Mode::Login(_)) {
            self.draw_login(f, chunks[1]);
        } else {
            self.draw_main(f, chunks[1]);
        }
        self.draw_message(f, chunks[2]);
        self.draw_help(f, chunks[3]);
    }

    fn draw_header<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
            .split(inner);

        let title = Paragraph::new(Spans::from(Span::styled(
            self.title,
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )));
        let clock = Paragraph::new(Span::styled(
            self.clock.as_str(),
            Style::default().fg(Color::Cyan),
        ))
        .alignment(Alignment::Right);

        f.render_widget(title, chunks[0]);
        f.render_widget(clock, chunks[1]);
    }

    fn draw_login<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let Mode::Login(form) = &self.data.mode else {
            return;
        };

        let masked = "*".repeat(form.password.chars().count());
        let text = vec![
            Spans::from(""),
            field_line(
                "Username",
                &form.username,
                form.focus == LoginField::Username,
            ),
            Spans::from(""),
            field_line("Password", &masked, form.focus == LoginField::Password),
        ];

        let paragraph =
            Paragraph::new(text).block(Block::default().title("Login").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn draw_main<B: Backend>(&mut self, f: &mut Frame<B>, area: Rect) {
        if self.data.is_admin() {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(35), Constraint::Percentage(65)].as_ref())
                .split(area);

            self.draw_controls(f, chunks[0]);
            self.draw_admin_panel(f, chunks[1]);
        } else {
            self.draw_controls(f, area);
        }
    }

    fn draw_controls<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let disabled = Style::default().fg(Color::DarkGray);
        let clock_style = if self.data.is_admin() {
            disabled
        } else {
            bold
        };

        let mut text = Vec::new();
        if let Some(session) = &self.data.session {
            text.push(Spans::from(vec![
                Span::raw("Logged in as "),
                Span::styled(session.username.as_str(), bold),
                Span::raw(format!(" ({})", session.role())),
            ]));
            text.push(Spans::from(""));
        }

        text.push(Spans::from(vec![
            Span::styled("e", clock_style),
            Span::styled(" - Register entry", clock_style),
        ]));
        text.push(Spans::from(vec![
            Span::styled("x", clock_style),
            Span::styled(" - Register exit", clock_style),
        ]));
        text.push(Spans::from(vec![
            Span::styled("l", bold),
            Span::raw(" - Log out"),
        ]));

        let paragraph =
            Paragraph::new(text).block(Block::default().title("Controls").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn draw_admin_panel<B: Backend>(&mut self, f: &mut Frame<B>, area: Rect) {
        if matches!(self.data.mode, Mode::Login(_) | Mode::Controls) {
            Self::draw_users(f, area, &mut self.data);
            return;
        }

        match &self.data.mode {
            Mode::UserForm(form) => Self::draw_user_form(f, area, form),
            Mode::ConfirmDelete { username } => {
                let text = vec![
                    Spans::from(""),
                    Spans::from(vec![
                        Span::raw("Delete user "),
                        Span::styled(
                            username.as_str(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("? (y/n)"),
                    ]),
                ];
                let paragraph = Paragraph::new(text)
                    .block(Block::default().title("Confirm").borders(Borders::ALL));
                f.render_widget(paragraph, area);
            }
            Mode::Login(_) | Mode::Controls => (),
        }
    }

    fn draw_users<B: Backend>(f: &mut Frame<B>, area: Rect, data: &mut AppState) {
        let items: Vec<ListItem> = data
            .users
            .iter()
            .map(|u| {
                let mut spans = vec![Span::raw(u.username.clone())];
                if u.is_admin {
                    spans.push(Span::styled(" [admin]", Style::default().fg(Color::Yellow)));
                }
                if let Some(full_name) = &u.full_name {
                    spans.push(Span::styled(
                        format!(" {full_name}"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                ListItem::new(Spans::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Users").borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut data.users_state);
    }

    fn draw_user_form<B: Backend>(f: &mut Frame<B>, area: Rect, form: &UserForm) {
        let mut text = vec![Spans::from("")];
        if matches!(form.mode, UserFormMode::Edit { .. }) {
            text.push(Spans::from(vec![
                Span::styled("Username", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!(": {}", form.username)),
            ]));
        }

        for field in form.fields() {
            let focused = form.focus == *field;
            let line = match field {
                UserFormField::IsAdmin => {
                    let mark = if form.is_admin { "[x]" } else { "[ ]" };
                    field_line(field.label(), mark, focused)
                }
                UserFormField::Password => {
                    field_line(field.label(), &"*".repeat(form.password.chars().count()), focused)
                }
                _ => field_line(field.label(), form.value(*field), focused),
            };
            text.push(line);
        }

        let paragraph = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(form.title()).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn draw_message<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let message = self.data.message.as_deref().unwrap_or("");
        let paragraph = Paragraph::new(message)
            .block(Block::default().title("Message").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn draw_help<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let help = match &self.data.mode {
            Mode::Login(_) => "TAB - Switch field | ENTER - Log in | ESC - Quit",
            Mode::Controls if self.data.is_admin() => {
                "UP/DOWN - Select | r - Refresh | n - New | m - Edit | d - Delete | l - Log out | q - Quit"
            }
            Mode::Controls => "e - Entry | x - Exit | l - Log out | q - Quit",
            Mode::UserForm(_) => {
                "TAB - Next field | SPACE - Toggle admin | ENTER - Save | ESC - Cancel"
            }
            Mode::ConfirmDelete { .. } => "y - Delete | n - Keep",
        };

        let paragraph =
            Paragraph::new(help).block(Block::default().title("Help").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

fn field_line<'t>(label: &'t str, value: &str, focused: bool) -> Spans<'t> {
    let label_style = if focused {
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let cursor = if focused { "_" } else { "" };

    Spans::from(vec![
        Span::styled(label, label_style),
        Span::raw(format!(": {value}{cursor}")),
    ])
}
