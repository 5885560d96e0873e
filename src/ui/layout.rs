use ratatui::layout::{Margin, Position, Rect};

pub const CARD_WIDTH: u16 = 40;
pub const CARD_HEIGHT: u16 = 5;
pub const BUTTON_WIDTH: u16 = 34;
pub const BUTTON_HEIGHT: u16 = 3;

/// Regions inside the body, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyRegions {
    pub paragraph: Rect,
    pub card: Rect,
    pub button: Rect,
}

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_regions(body: Rect) -> BodyRegions {
    let paragraph = centered_strip(body, body.width, body.y.saturating_add(1), 1);
    let card = centered_strip(body, CARD_WIDTH, body.y.saturating_add(3), CARD_HEIGHT);
    let inner = card.inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    let button = centered_strip(inner, BUTTON_WIDTH, inner.y, BUTTON_HEIGHT);
    BodyRegions {
        paragraph,
        card,
        button,
    }
}

/// Button rectangle for a full terminal area. Drawing and mouse hit-testing
/// both go through here so they always agree.
pub fn button_rect(area: Rect) -> Rect {
    body_regions(layout_regions(area).1).button
}

pub fn hits_button(area: Rect, column: u16, row: u16) -> bool {
    button_rect(area).contains(Position { x: column, y: row })
}

/// Horizontally centered strip of at most `width` x `height`, clipped to `area`.
fn centered_strip(area: Rect, width: u16, y: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    let y = y.clamp(area.top(), area.bottom());
    let height = height.min(area.bottom() - y);
    Rect {
        x,
        y,
        width,
        height,
    }
}
