use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::util::colors;

const SEARCH_PLACEHOLDER: &str = "search songs and playlists";

/// Static top bar. The links and the search field do nothing.
pub struct Navbar;

impl Widget for Navbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::MUTED));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(8),
                Constraint::Length(11),
                Constraint::Length(11),
                Constraint::Fill(1),
                Constraint::Length(9),
            ])
            .spacing(1)
            .split(inner);

        Paragraph::new("Logo".fg(colors::PRIMARY).bold()).render(chunks[0], buf);
        Paragraph::new("Podcasts".fg(colors::NAVBAR)).render(chunks[1], buf);
        Paragraph::new("Trending".fg(colors::NAVBAR)).render(chunks[2], buf);

        let search = Line::from(vec![
            " ".fg(colors::NEUTRAL),
            SEARCH_PLACEHOLDER.fg(colors::NEUTRAL).italic(),
        ]);
        Paragraph::new(search)
            .style(Style::new().bg(colors::MUTED))
            .render(chunks[3], buf);

        Paragraph::new("Profile".fg(colors::NAVBAR))
            .right_aligned()
            .render(chunks[4], buf);
    }
}
