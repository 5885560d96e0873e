use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::theme::{BODY_TEXT, BUTTON_BG, BUTTON_BORDER, CARD_BORDER, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub const WELCOME: &str = "Welcome to your React application!";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);

    let regions = body_regions(body);
    frame.render_widget(
        Paragraph::new(WELCOME)
            .alignment(Alignment::Center)
            .style(Style::default().fg(BODY_TEXT)),
        regions.paragraph,
    );
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(CARD_BORDER)),
        regions.card,
    );
    frame.render_widget(button(app), regions.button);

    frame.render_widget(Footer, footer);
}

fn button(app: &App) -> Paragraph<'static> {
    Paragraph::new(app.button_label())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(HEADER_TEXT)
                .bg(BUTTON_BG)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BUTTON_BORDER)),
        )
}
