//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. [`App::handle`] is the
//! whole of the input logic and never touches the terminal, so tests drive it
//! directly.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent},
    handlers,
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        dialog::Dialog,
        help::HelpPopup,
        input_field::{InputField, InputFieldState},
        status_bar::StatusBar,
        tag_list::{TagList, TagListState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    Frame, Terminal,
};
use std::{io, time::Duration};
use tagsearch_core::{launch::Launcher, SharePayload, TaggedSearchStore};

// ---------------------------------------------------------------------------
// Focus, modal and status types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Query,
    Tag,
    List,
    /// Vim-style `:` command line is active.
    Command,
}

impl Focus {
    fn next(self) -> Focus {
        match self {
            Focus::Query => Focus::Tag,
            Focus::Tag => Focus::List,
            Focus::List | Focus::Command => Focus::Query,
        }
    }

    fn prev(self) -> Focus {
        match self {
            Focus::Query => Focus::List,
            Focus::Tag => Focus::Query,
            Focus::List | Focus::Command => Focus::Tag,
        }
    }
}

/// A blocking dialog. While one is open it receives every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Save was attempted with an empty query or tag. One `OK` control.
    MissingInput,
    /// Long-press menu for `tag`; `cursor` indexes [`tagsearch_core::Action::ALL`].
    Actions { tag: String, cursor: usize },
    ConfirmDelete { tag: String, delete_focused: bool },
    Share(SharePayload),
}

/// Outcome of the last gesture, shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub store: TaggedSearchStore,
    pub launcher: Box<dyn Launcher>,
    pub query: InputFieldState,
    pub tag: InputFieldState,
    pub list: TagListState,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub modal: Option<Modal>,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub status: Option<Status>,
    pub theme: Theme,
    pub quit: bool,
}

impl AppState {
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        tracing::debug!(open = self.show_help, "help popup toggled");
    }

    /// True when keys should type characters rather than trigger shortcuts.
    pub fn is_insert_mode(&self) -> bool {
        self.modal.is_some() || matches!(self.focus, Focus::Query | Focus::Tag | Focus::Command)
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(store: TaggedSearchStore, launcher: Box<dyn Launcher>, theme: Theme) -> Self {
        let mut list = TagListState::default();
        list.observe(&store);

        let state = AppState {
            store,
            launcher,
            query: InputFieldState::default(),
            tag: InputFieldState::default(),
            list,
            focus: Focus::Query,
            prev_focus: Focus::Query,
            modal: None,
            show_help: false,
            command_bar: CommandBarState::default(),
            status: None,
            theme,
            quit: false,
        };

        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(250))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        let app_event = if self.state.is_insert_mode() {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(
                                focus = ?self.state.focus,
                                event = ?ev,
                                "key event"
                            );
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Apply one event to the application state.
    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Ctrl+c (and `q` on the list) quit from anywhere.
        if event == AppEvent::Quit {
            tracing::debug!("quit");
            s.quit = true;
            return;
        }

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Enter) {
                s.toggle_help();
            }
            return;
        }

        if s.modal.is_some() {
            handlers::on_modal_event(s, event);
            s.list.observe(&s.store);
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            handle_command_bar(s, event);
            return;
        }

        match event {
            AppEvent::Save => handlers::on_save(s),

            AppEvent::Char('?') if s.focus == Focus::List => s.toggle_help(),

            AppEvent::Char(':') if s.focus == Focus::List => {
                tracing::debug!("entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::FocusNext => {
                let next = s.focus.next();
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }
            AppEvent::FocusPrev => {
                let prev = s.focus.prev();
                tracing::debug!(from = ?s.focus, to = ?prev, "focus cycle");
                s.focus = prev;
            }

            // Leave a text field for the list
            AppEvent::Escape => {
                if matches!(s.focus, Focus::Query | Focus::Tag) {
                    tracing::debug!(from = ?s.focus, "focus -> List");
                    s.focus = Focus::List;
                }
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }

        s.list.observe(&s.store);
    }

    /// Draw the whole screen into `frame`.
    pub fn render(&self, frame: &mut Frame) {
        draw(frame, &self.state);
    }
}

fn handle_command_bar(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Escape => {
            tracing::debug!("command bar cancelled");
            s.command_bar.clear();
            s.focus = s.prev_focus;
        }
        AppEvent::Enter => match Command::parse(&s.command_bar.input.value) {
            Ok(cmd) => {
                tracing::debug!(command = ?cmd, "executing command");
                s.command_bar.clear();
                s.focus = s.prev_focus;
                execute_command(s, cmd);
            }
            Err(msg) if msg.is_empty() => {
                s.command_bar.clear();
                s.focus = s.prev_focus;
            }
            Err(msg) => {
                // Show the error; bar stays open
                s.command_bar.error = Some(msg);
            }
        },
        other => s.command_bar.handle(&other),
    }
}

/// Route an event to the pane that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::Query => match event {
            AppEvent::Enter => s.focus = Focus::Tag,
            other => s.query.handle(&other),
        },
        Focus::Tag => match event {
            AppEvent::Enter => handlers::on_save(s),
            other => s.tag.handle(&other),
        },
        Focus::List => match event {
            AppEvent::Enter => handlers::on_open(s),
            AppEvent::LongPress => handlers::on_long_press(s),
            other => s.list.handle(&other, s.store.len()),
        },
        Focus::Command => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: title | query | tag | list | status
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(" tagsearch ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("saved Flickr searches", state.theme.hint),
    ]);
    frame.render_widget(title, vert[0]);

    let query = InputField::new(
        &state.query,
        "Query",
        "Flickr search, e.g. red robin",
        state.focus == Focus::Query,
        &state.theme,
    );
    let tag = InputField::new(
        &state.tag,
        "Tag",
        "short name for this search",
        state.focus == Focus::Tag,
        &state.theme,
    );
    let query_cursor = query.cursor_position(vert[1]);
    let tag_cursor = tag.cursor_position(vert[2]);
    frame.render_widget(query, vert[1]);
    frame.render_widget(tag, vert[2]);

    frame.render_widget(
        TagList::new(&state.store, &state.list, state.focus == Focus::List, &state.theme),
        vert[3],
    );
    frame.render_widget(StatusBar::new(state.status.as_ref(), &state.theme), vert[4]);

    if let Some(modal) = &state.modal {
        frame.render_widget(Dialog::new(modal, &state.theme), area);
        return;
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
        return;
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        frame.set_cursor_position((state.command_bar.cursor_col(cmd_area), cmd_area.y));
        return;
    }

    match state.focus {
        Focus::Query => frame.set_cursor_position(query_cursor),
        Focus::Tag => frame.set_cursor_position(tag_cursor),
        Focus::List | Focus::Command => {}
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}
