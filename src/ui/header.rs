use crate::ui::theme::{GLOBAL_BORDER, REACT_CYAN};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const HEADING: &str = "React Test Hosting App";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let heading_style = Style::default()
            .fg(REACT_CYAN)
            .add_modifier(Modifier::BOLD);
        let line = Line::from(vec![Span::styled(HEADING, heading_style)]);

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
