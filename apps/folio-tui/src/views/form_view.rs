//! Create/edit dialog overlay

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use folio_core::{BookForm, FormMode};

use crate::app::centered_rect;

/// Field labels in dialog order. Must stay in step with the focused-field
/// buffers in `App`.
pub const FIELD_LABELS: [&str; 12] = [
    "ISBN",
    "Title",
    "Year",
    "Price",
    "Pages",
    "Category",
    "Cover photo",
    "Author identity no",
    "Author first name",
    "Author last name",
    "Publisher id",
    "Publisher name",
];

/// Modal dialog over the flat form field buffers.
pub struct FormView;

impl FormView {
    pub fn new() -> Self {
        Self
    }

    /// Render the dialog over the whole screen area.
    pub fn render(&self, frame: &mut Frame, area: Rect, form: &BookForm, focused: usize) {
        let (title, submit_label) = match form.mode {
            FormMode::Edit => ("Edit Book", "Update"),
            _ => ("Add New Book", "Save"),
        };

        let overlay = centered_rect(60, 80, area);
        frame.render_widget(Clear, overlay);

        let values = [
            &form.isbn,
            &form.title,
            &form.year,
            &form.price,
            &form.page,
            &form.category,
            &form.cover_photo,
            &form.author_identity_no,
            &form.author_first_name,
            &form.author_last_name,
            &form.publisher_id,
            &form.publisher_name,
        ];

        let mut lines: Vec<Line> = Vec::with_capacity(FIELD_LABELS.len() + 2);
        for (i, (label, value)) in FIELD_LABELS.iter().zip(values).enumerate() {
            let is_focused = i == focused;
            let marker = if is_focused { "> " } else { "  " };
            let value_span = if is_focused {
                Span::styled(
                    format!("{value}_"),
                    Style::default().add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(value.clone())
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(format!("{label:<19}"), Style::default().fg(Color::Gray)),
                value_span,
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("Enter: {submit_label}  Tab: next field  Esc: cancel"),
            Style::default().fg(Color::DarkGray),
        )));

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));
        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }
}
