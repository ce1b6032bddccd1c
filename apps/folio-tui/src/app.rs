//! Application state and main render loop

use std::sync::OnceLock;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tokio::runtime::Runtime;

use bookstore_client::BookstoreClient;
use folio_core::{CatalogView, CategoryFilter, Command, Effect, Session};

use crate::mode::Mode;
use crate::views::{FormView, ShelfView, FIELD_LABELS};

/// Category filter choices, in selector order. Mutually exclusive.
pub const FILTER_CHOICES: [&str; 9] = [
    "All",
    "IT",
    "Science Fiction",
    "Fantasy",
    "Mystery",
    "Romance",
    "Thriller",
    "Biography",
    "History",
];

/// Kind of transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification shown in the message line until the next action.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Get or create the runtime that executes gateway calls to completion.
///
/// Calls run one at a time on the event thread, so a second load can never
/// race an in-flight one.
fn runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Main application state
pub struct App {
    /// Current mode (BROWSE, SEARCH, FORM, CONFIRM)
    pub mode: Mode,
    /// Headless session: catalog state, dialog fields, pending delete
    pub session: Session,
    /// Gateway to the remote store
    gateway: BookstoreClient,
    /// Cursor within the visible grid
    pub selected: usize,
    /// Selected entry of [`FILTER_CHOICES`]
    pub filter_index: usize,
    /// Focused form field index
    pub focused_field: usize,
    /// Transient notification
    pub toast: Option<Toast>,
    /// Whether the initial full fetch is still in flight
    pub loading: bool,
    /// Whether to show the help overlay
    pub show_help: bool,
    shelf: ShelfView,
    form_view: FormView,
}

impl App {
    /// Create a new application instance against the built-in base address.
    pub fn new() -> Result<Self, bookstore_client::ClientError> {
        Ok(Self {
            mode: Mode::Browse,
            session: Session::new(),
            gateway: BookstoreClient::new()?,
            selected: 0,
            filter_index: 0,
            focused_field: 0,
            toast: None,
            loading: true,
            show_help: false,
            shelf: ShelfView::new(),
            form_view: FormView::new(),
        })
    }

    /// Probe the service before the first fetch. A failure only surfaces a
    /// toast; the fetch is attempted regardless.
    pub fn check_health(&mut self) {
        if let Err(err) = runtime().block_on(self.gateway.health()) {
            tracing::warn!(%err, "health probe failed");
            self.toast = Some(Toast::error("Bookstore service is unreachable"));
        }
    }

    // ===== Command dispatch =====

    /// Apply a command to the session and execute the gateway effect it
    /// requests, if any. Dispatch failures surface as an error toast and
    /// leave everything else unchanged.
    pub fn dispatch(&mut self, command: Command) {
        match self.session.apply(command) {
            Ok(Some(effect)) => self.run_effect(effect),
            Ok(None) => {}
            Err(err) => self.toast = Some(Toast::error(err.to_string())),
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Load => {
                match runtime().block_on(self.gateway.list()) {
                    Ok(books) => {
                        self.session.on_loaded(books);
                        self.selected = 0;
                    }
                    Err(err) => {
                        tracing::error!(%err, "loading books failed");
                        self.toast = Some(Toast::error("Error loading books"));
                    }
                }
                self.loading = false;
            }
            Effect::Create(draft) => match runtime().block_on(self.gateway.create(&draft)) {
                Ok(book) => {
                    self.session.on_created(book);
                    self.mode = Mode::Browse;
                    self.toast = Some(Toast::success("Book added successfully!"));
                }
                Err(err) => {
                    tracing::warn!(%err, "create rejected");
                    self.toast = Some(Toast::error(err.to_string()));
                }
            },
            Effect::Update(id, draft) => {
                match runtime().block_on(self.gateway.update(&id, &draft)) {
                    Ok(book) => {
                        self.session.on_updated(book);
                        self.mode = Mode::Browse;
                        self.toast = Some(Toast::success("Book updated successfully!"));
                    }
                    Err(err) => {
                        tracing::warn!(%err, "update rejected");
                        self.toast = Some(Toast::error(err.to_string()));
                    }
                }
            }
            Effect::Delete(id) => match runtime().block_on(self.gateway.delete(&id)) {
                Ok(()) => {
                    self.session.on_deleted(&id);
                    self.toast = Some(Toast::success("Book deleted successfully!"));
                }
                Err(err) => {
                    tracing::warn!(%err, "delete rejected");
                    self.toast = Some(Toast::error(err.to_string()));
                }
            },
        }
    }

    // ===== Key handling =====

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.mode {
            Mode::Browse => self.handle_browse_key(code, modifiers),
            Mode::Search => self.handle_search_key(code),
            Mode::Form => self.handle_form_key(code),
            Mode::ConfirmDelete => self.handle_confirm_key(code),
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                let count = self.session.state.visible().len();
                if count > 0 {
                    self.selected = (self.selected + 1).min(count - 1);
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.cycle_filter(-1);
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.cycle_filter(1);
            }
            KeyCode::Char('/') => {
                self.mode = Mode::Search;
            }
            KeyCode::Char('a') => {
                self.dispatch(Command::OpenCreate);
                self.focused_field = 0;
                self.mode = Mode::Form;
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.selected_book_id() {
                    self.dispatch(Command::OpenEdit(id));
                    if self.session.form_open() {
                        self.focused_field = 0;
                        self.mode = Mode::Form;
                    }
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_book_id() {
                    self.dispatch(Command::RequestDelete(id));
                    self.mode = Mode::ConfirmDelete;
                }
            }
            KeyCode::Char('r') => {
                self.dispatch(Command::Reload);
            }
            _ => {}
        }
        false
    }

    fn handle_search_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc | KeyCode::Enter => {
                self.mode = Mode::Browse;
            }
            KeyCode::Backspace => {
                let mut term = self.session.state.search.clone();
                term.pop();
                self.dispatch(Command::SetSearch(term));
                self.selected = 0;
            }
            KeyCode::Char(c) => {
                let mut term = self.session.state.search.clone();
                term.push(c);
                self.dispatch(Command::SetSearch(term));
                self.selected = 0;
            }
            _ => {}
        }
        false
    }

    fn handle_form_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => {
                self.dispatch(Command::CloseForm);
                self.mode = Mode::Browse;
            }
            KeyCode::Enter => {
                self.dispatch(Command::SubmitForm);
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focused_field = (self.focused_field + 1) % FIELD_LABELS.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focused_field =
                    (self.focused_field + FIELD_LABELS.len() - 1) % FIELD_LABELS.len();
            }
            KeyCode::Backspace => {
                self.focused_buffer().pop();
            }
            KeyCode::Char(c) => {
                self.focused_buffer().push(c);
            }
            _ => {}
        }
        false
    }

    fn handle_confirm_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('y') | KeyCode::Enter => {
                self.dispatch(Command::ConfirmDelete);
                self.mode = Mode::Browse;
                let count = self.session.state.visible().len();
                self.selected = self.selected.min(count.saturating_sub(1));
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.dispatch(Command::CancelDelete);
                self.mode = Mode::Browse;
            }
            _ => {}
        }
        false
    }

    fn cycle_filter(&mut self, step: isize) {
        let len = FILTER_CHOICES.len() as isize;
        self.filter_index = ((self.filter_index as isize + step + len) % len) as usize;
        let filter = match FILTER_CHOICES[self.filter_index] {
            "All" => CategoryFilter::All,
            category => CategoryFilter::Category(category.to_string()),
        };
        self.dispatch(Command::SetFilter(filter));
        self.selected = 0;
    }

    fn selected_book_id(&self) -> Option<String> {
        self.session
            .state
            .visible()
            .get(self.selected)
            .map(|b| b.id.clone())
    }

    /// Mutable buffer of the focused form field, in dialog order.
    fn focused_buffer(&mut self) -> &mut String {
        let form = &mut self.session.form;
        match self.focused_field {
            0 => &mut form.isbn,
            1 => &mut form.title,
            2 => &mut form.year,
            3 => &mut form.price,
            4 => &mut form.page,
            5 => &mut form.category,
            6 => &mut form.cover_photo,
            7 => &mut form.author_identity_no,
            8 => &mut form.author_first_name,
            9 => &mut form.author_last_name,
            10 => &mut form.publisher_id,
            _ => &mut form.publisher_name,
        }
    }

    // ===== Rendering =====

    /// Render the application
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let view = CatalogView::project(&self.session.state);
        self.selected = self.selected.min(view.cards.len().saturating_sub(1));

        // Main layout: status bar, filter bar, grid, message line
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Filter bar
                Constraint::Min(0),    // Card grid
                Constraint::Length(1), // Message line
            ])
            .split(size);

        self.render_status_bar(frame, chunks[0], &view);
        self.render_filter_bar(frame, chunks[1]);

        if self.loading {
            self.render_loading(frame, chunks[2]);
        } else {
            self.shelf.render(frame, chunks[2], &view, self.selected);
        }

        self.render_message_line(frame, chunks[3]);

        if self.session.form_open() {
            self.form_view
                .render(frame, size, &self.session.form, self.focused_field);
        }

        if self.mode == Mode::ConfirmDelete {
            self.render_confirm_overlay(frame, size);
        }

        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, view: &CatalogView) {
        let mode_color = match self.mode {
            Mode::Browse => Color::Blue,
            Mode::Search => Color::Green,
            Mode::Form => Color::Magenta,
            Mode::ConfirmDelete => Color::Red,
        };

        let line = Line::from(vec![
            Span::styled(" folio ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("[{}]", self.mode.short_code()),
                Style::default().fg(mode_color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " | {} books | {} categories ",
                view.stats.total_books, view.stats.distinct_categories
            )),
        ]);

        let status_bar = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(status_bar, area);
    }

    fn render_filter_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        for (i, choice) in FILTER_CHOICES.iter().enumerate() {
            let style = if i == self.filter_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {choice} "), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let paragraph = Paragraph::new("Loading books...")
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        frame.render_widget(paragraph, area);
    }

    fn render_message_line(&self, frame: &mut Frame, area: Rect) {
        let content = match self.mode {
            Mode::Search => Line::from(format!("/{}", self.session.state.search)),
            _ => match &self.toast {
                Some(toast) => {
                    let color = match toast.kind {
                        ToastKind::Success => Color::Green,
                        ToastKind::Error => Color::Red,
                    };
                    Line::from(Span::styled(
                        toast.message.clone(),
                        Style::default().fg(color),
                    ))
                }
                None => Line::from(
                    "a: add  e: edit  d: delete  /: search  h/l: category  r: reload  ?: help  q: quit",
                ),
            },
        };
        frame.render_widget(Paragraph::new(content), area);
    }

    fn render_confirm_overlay(&self, frame: &mut Frame, area: Rect) {
        let title = self
            .session
            .pending_delete
            .as_deref()
            .and_then(|id| self.session.state.book(id))
            .map(|b| b.title.clone())
            .unwrap_or_default();

        let block = Block::default()
            .title("Delete Book")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));
        let text = format!("Are you sure you want to delete \"{title}\"?\n\ny: delete  n: keep");
        let overlay = centered_rect(40, 20, area);
        frame.render_widget(Clear, overlay);
        frame.render_widget(Paragraph::new(text).block(block), overlay);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_text = r#"
Folio - Help

Navigation:
  j/k     - Move through the grid
  h/l     - Previous/next category filter
  /       - Edit the search term (Esc or Enter to leave)

Catalog:
  a       - Add a new book
  e/Enter - Edit the selected book
  d       - Delete the selected book (asks first)
  r       - Reload the collection

Dialog:
  Tab/Shift-Tab - Move between fields
  Enter         - Save
  Esc           - Cancel

Other:
  ?       - Toggle this help
  q       - Quit
"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(60, 80, area);
        frame.render_widget(Clear, help_area);
        frame.render_widget(Paragraph::new(help_text).block(block), help_area);
    }
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
