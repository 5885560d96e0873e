use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
const HINTS: &str = "Enter/Space/Click: Count │ q: Quit";

/// Bordered bar: key hints on the left, crate version on the right.
pub struct Footer;

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let version_width = VERSION.chars().count() as u16 + 1;
        let [hints_area, version_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(version_width)])
                .areas(inner);

        Paragraph::new(format!(" {HINTS}"))
            .style(text_style)
            .render(hints_area, buf);
        Paragraph::new(VERSION)
            .style(text_style)
            .alignment(Alignment::Right)
            .render(version_area, buf);
    }
}
