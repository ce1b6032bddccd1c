//! Card grid view
//!
//! Renders the visible subset as a grid of book cards, or the empty-state
//! placeholder when nothing matches. Pure adapter over [`CatalogView`].

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use folio_core::{BookCard, CatalogView, CoverArt};

const CARD_WIDTH: u16 = 34;
const CARD_HEIGHT: u16 = 10;

/// Grid of book cards with page-wise scrolling.
pub struct ShelfView;

impl ShelfView {
    pub fn new() -> Self {
        Self
    }

    /// Render the grid for the current view model.
    pub fn render(&self, frame: &mut Frame, area: Rect, view: &CatalogView, selected: usize) {
        if view.is_empty() {
            self.render_empty_state(frame, area);
            return;
        }

        let cols = (area.width / CARD_WIDTH).max(1) as usize;
        let rows = (area.height / CARD_HEIGHT).max(1) as usize;
        let per_page = cols * rows;

        // Keep the selected card on screen by paging, not line scrolling.
        let page = selected / per_page;
        let start = page * per_page;
        let end = view.cards.len().min(start + per_page);

        for (i, card) in view.cards[start..end].iter().enumerate() {
            let col = (i % cols) as u16;
            let row = (i / cols) as u16;
            let rect = Rect {
                x: area.x + col * CARD_WIDTH,
                y: area.y + row * CARD_HEIGHT,
                width: CARD_WIDTH.min(area.width.saturating_sub(col * CARD_WIDTH)),
                height: CARD_HEIGHT.min(area.height.saturating_sub(row * CARD_HEIGHT)),
            };
            self.render_card(frame, rect, card, start + i == selected);
        }
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, card: &BookCard, is_selected: bool) {
        let border_style = if is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let cover_line = match &card.cover {
            CoverArt::Image(path) => Line::from(Span::styled(
                path.clone(),
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            )),
            CoverArt::Glyph(glyph) => Line::from(Span::styled(
                *glyph,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        };

        let lines = vec![
            cover_line,
            Line::from(Span::styled(
                card.badge.clone(),
                Style::default().fg(Color::Magenta),
            )),
            Line::from(card.author_line.clone()),
            Line::from(card.publisher_line.clone()),
            Line::from(format!("Year {}  Pages {}", card.year, card.pages)),
            Line::from(format!("ISBN {}", card.isbn_short)),
            Line::from(Span::styled(
                card.price_display.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        let block = Block::default()
            .title(Span::styled(
                card.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(border_style);

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_empty_state(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let paragraph = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled(
                "No books found",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::raw("Press a to add a book, or adjust the search and category filter."),
        ])
        .centered()
        .block(block);
        frame.render_widget(paragraph, area);
    }
}
